use boostline_engine::{withdrawals, Actor};
use boostline_plans::money;
use sea_orm::DatabaseConnection;

use crate::error::{CliError, CliResult};

pub async fn execute(
    db: &DatabaseConnection,
    admin: i32,
    withdrawal: i32,
    decision: String,
    reason: Option<String>,
) -> CliResult<()> {
    let actor = Actor::load(db, admin).await?;

    match decision.to_ascii_lowercase().as_str() {
        "approve" => {
            let withdrawal = withdrawals::approve_withdrawal(db, &actor, withdrawal).await?;
            println!(
                "✅ Withdrawal #{} approved: {} to worker #{}",
                withdrawal.id,
                money::format_kz(withdrawal.amount),
                withdrawal.worker_id
            );
        }
        "reject" => {
            let reason = reason.ok_or_else(|| {
                CliError::InvalidArgument("--reason is required when rejecting".to_string())
            })?;
            let withdrawal = withdrawals::reject_withdrawal(db, &actor, withdrawal, &reason).await?;
            println!("🚫 Withdrawal #{} rejected: {reason}", withdrawal.id);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown decision '{other}' (expected approve or reject)"
            )));
        }
    }
    Ok(())
}
