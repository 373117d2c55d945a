use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod parse;

use error::CliResult;

#[derive(Parser)]
#[command(name = "boostline")]
#[command(about = "Boostline CLI - campaign lifecycle and task settlement back office")]
#[command(version)]
struct Cli {
    /// Path to the marketplace database
    #[arg(long, global = true, default_value = "boostline.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and bring its schema up to date
    InitDb,

    /// Seed accounts from a YAML file
    Seed {
        /// Seed configuration file
        config: PathBuf,
    },

    /// Create a campaign for a client (starts in pending_payment)
    CreateCampaign {
        /// Client account id
        #[arg(long)]
        client: i32,

        /// Plan type: follow_growth or full_engagement
        #[arg(long)]
        plan_type: String,

        /// Plan tier name, e.g. "Ta Fixe"
        #[arg(long)]
        plan: String,

        /// Platform: facebook, instagram, tiktok or youtube
        #[arg(long)]
        platform: String,

        /// Link workers will act on
        #[arg(long)]
        target_link: String,

        /// Optional profile link
        #[arg(long)]
        profile_link: Option<String>,

        /// Optional video link
        #[arg(long)]
        video_link: Option<String>,
    },

    /// Confirm payment: pending_payment -> active
    ApproveCampaign {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Campaign id
        campaign: i32,
    },

    /// Refuse payment: pending_payment -> cancelled
    RejectCampaign {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Campaign id
        campaign: i32,

        /// Reason shown to the client
        #[arg(long)]
        reason: String,
    },

    /// Cancel a live campaign: active -> cancelled
    CancelCampaign {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Campaign id
        campaign: i32,

        /// Reason shown to the client
        #[arg(long)]
        reason: String,
    },

    /// List campaigns as the given account (admins filter by status,
    /// clients see their own, workers see claimable campaigns)
    ListCampaigns {
        /// Account id to list as
        account: i32,

        /// Status filter for admin listings
        #[arg(long, default_value = "pending_payment")]
        status: String,
    },

    /// List tasks as the given account (admins see the review queue,
    /// workers their own history)
    ListTasks {
        /// Account id to list as
        account: i32,
    },

    /// List withdrawals as the given account (admins filter by status,
    /// workers see their own requests)
    ListWithdrawals {
        /// Account id to list as
        account: i32,

        /// Status filter for admin listings
        #[arg(long, default_value = "pending")]
        status: String,
    },

    /// Reserve a task slot on an active campaign
    ClaimTask {
        /// Worker account id
        #[arg(long)]
        worker: i32,

        /// Campaign id
        campaign: i32,
    },

    /// Attach proof links and move the task to pending_review
    SubmitProofs {
        /// Worker account id
        #[arg(long)]
        worker: i32,

        /// Task id
        task: i32,

        /// Follow proof link (required for every plan)
        #[arg(long)]
        follow: Option<String>,

        /// Like proof link (full_engagement)
        #[arg(long)]
        like: Option<String>,

        /// Comment proof link (full_engagement)
        #[arg(long)]
        comment: Option<String>,

        /// Share proof link (full_engagement)
        #[arg(long)]
        share: Option<String>,
    },

    /// Approve or reject a task in review
    ReviewTask {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Task id
        task: i32,

        /// Decision: approve or reject
        decision: String,

        /// Reason, required when rejecting
        #[arg(long)]
        reason: Option<String>,
    },

    /// Request a payout from the worker's available balance
    RequestWithdrawal {
        /// Worker account id
        #[arg(long)]
        worker: i32,

        /// Amount in whole kwanzas, e.g. "1500" or "1 500"
        amount: String,

        /// Payout method: iban or mobile_wallet
        #[arg(long)]
        method: String,

        /// IBAN or wallet number
        #[arg(long)]
        details: String,
    },

    /// Approve or reject a pending withdrawal
    ReviewWithdrawal {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Withdrawal id
        withdrawal: i32,

        /// Decision: approve or reject
        decision: String,

        /// Reason, required when rejecting
        #[arg(long)]
        reason: Option<String>,
    },

    /// Export approved withdrawals as a payout CSV
    ExportPayouts {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Output file path
        #[arg(short, long, default_value = "payouts.csv")]
        output: PathBuf,
    },

    /// Block an account (and its device fingerprint, if any)
    BlockUser {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Account id to block
        account: i32,

        /// Reason shown to the account
        #[arg(long)]
        reason: String,
    },

    /// Lift a block, including the device-fingerprint entry
    UnblockUser {
        /// Admin account id
        #[arg(long)]
        admin: i32,

        /// Account id to unblock
        account: i32,
    },

    /// Show a worker's derived balance
    Balance {
        /// Worker account id
        worker: i32,
    },

    /// List an account's notifications, optionally marking one read
    Notifications {
        /// Account id
        account: i32,

        /// Notification id to mark as read
        #[arg(long)]
        mark_read: Option<i32>,
    },

    /// Write a compact read-only backup of the database
    BackupDb {
        /// Backup file path (must not exist)
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let db = boostline_db::open_db(&cli.database).await?;

    match cli.command {
        Commands::InitDb => commands::init_db::execute(&cli.database),

        Commands::Seed { config } => commands::seed::execute(&db, config).await,

        Commands::CreateCampaign {
            client,
            plan_type,
            plan,
            platform,
            target_link,
            profile_link,
            video_link,
        } => {
            commands::create_campaign::execute(
                &db,
                client,
                plan_type,
                plan,
                platform,
                target_link,
                profile_link,
                video_link,
            )
            .await
        }

        Commands::ApproveCampaign { admin, campaign } => {
            commands::approve_campaign::execute(&db, admin, campaign).await
        }

        Commands::RejectCampaign {
            admin,
            campaign,
            reason,
        } => commands::reject_campaign::execute(&db, admin, campaign, reason).await,

        Commands::CancelCampaign {
            admin,
            campaign,
            reason,
        } => commands::cancel_campaign::execute(&db, admin, campaign, reason).await,

        Commands::ListCampaigns { account, status } => {
            commands::list_campaigns::execute(&db, account, status).await
        }

        Commands::ListTasks { account } => commands::list_tasks::execute(&db, account).await,

        Commands::ListWithdrawals { account, status } => {
            commands::list_withdrawals::execute(&db, account, status).await
        }

        Commands::ClaimTask { worker, campaign } => {
            commands::claim_task::execute(&db, worker, campaign).await
        }

        Commands::SubmitProofs {
            worker,
            task,
            follow,
            like,
            comment,
            share,
        } => commands::submit_proofs::execute(&db, worker, task, follow, like, comment, share).await,

        Commands::ReviewTask {
            admin,
            task,
            decision,
            reason,
        } => commands::review_task::execute(&db, admin, task, decision, reason).await,

        Commands::RequestWithdrawal {
            worker,
            amount,
            method,
            details,
        } => commands::request_withdrawal::execute(&db, worker, amount, method, details).await,

        Commands::ReviewWithdrawal {
            admin,
            withdrawal,
            decision,
            reason,
        } => commands::review_withdrawal::execute(&db, admin, withdrawal, decision, reason).await,

        Commands::ExportPayouts { admin, output } => {
            commands::export_payouts::execute(&db, admin, output).await
        }

        Commands::BlockUser {
            admin,
            account,
            reason,
        } => commands::block_user::execute(&db, admin, account, reason).await,

        Commands::UnblockUser { admin, account } => {
            commands::unblock_user::execute(&db, admin, account).await
        }

        Commands::Balance { worker } => commands::balance::execute(&db, worker).await,

        Commands::Notifications { account, mark_read } => {
            commands::notifications::execute(&db, account, mark_read).await
        }

        Commands::BackupDb { output } => commands::backup_db::execute(&db, output).await,
    }
}
