use boostline_engine::{withdrawals, Actor};
use boostline_plans::money;
use sea_orm::DatabaseConnection;

use crate::error::CliResult;
use crate::parse;

pub async fn execute(
    db: &DatabaseConnection,
    worker: i32,
    amount: String,
    method: String,
    details: String,
) -> CliResult<()> {
    let actor = Actor::load(db, worker).await?;
    let amount = money::parse_amount(&amount)?;
    let method = parse::withdrawal_method(&method)?;

    let withdrawal =
        withdrawals::request_withdrawal(db, &actor, amount, method, &details).await?;

    println!(
        "💸 Withdrawal #{} requested: {} (pending review)",
        withdrawal.id,
        money::format_kz(withdrawal.amount)
    );
    Ok(())
}
