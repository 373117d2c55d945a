use boostline_engine::{withdrawals, Actor};
use boostline_entities::accounts::Role;
use boostline_entities::withdrawals::Model as Withdrawal;
use boostline_plans::money;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::error::{CliError, CliResult};
use crate::parse;

/// Admins see the payout queue for one status; workers see their own
/// request history.
pub async fn execute(db: &DatabaseConnection, account: i32, status: String) -> CliResult<()> {
    let actor = Actor::load(db, account).await?;

    let rows = match actor.role {
        Role::Admin => {
            let status = parse::withdrawal_status(&status)?;
            withdrawals::list_withdrawals_by_status(db, &actor, status).await?
        }
        Role::Worker => withdrawals::list_withdrawals_for_worker(db, &actor).await?,
        Role::Client => {
            return Err(CliError::InvalidArgument(
                "clients have no withdrawals".to_string(),
            ));
        }
    };

    if rows.is_empty() {
        println!("No withdrawals.");
        return Ok(());
    }

    for withdrawal in &rows {
        print_row(withdrawal);
    }
    println!("{} withdrawals", rows.len());
    Ok(())
}

fn print_row(withdrawal: &Withdrawal) {
    println!(
        "  #{} [{}] worker #{}, {} via {}",
        withdrawal.id,
        withdrawal.status.to_value(),
        withdrawal.worker_id,
        money::format_kz(withdrawal.amount),
        withdrawal.method.to_value(),
    );
}
