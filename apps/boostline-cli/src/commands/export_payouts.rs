use boostline_engine::{withdrawals, Actor};
use boostline_entities::withdrawals::WithdrawalStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

use crate::error::CliResult;

#[derive(Debug, Serialize)]
struct PayoutRow {
    withdrawal_id: i32,
    worker_id: i32,
    amount: i64,
    method: String,
    payout_details: String,
    approved_at: String,
}

/// Export every approved withdrawal as a CSV suitable for handing to the
/// bank operator.
pub async fn execute(db: &DatabaseConnection, admin: i32, output: PathBuf) -> CliResult<()> {
    let actor = Actor::load(db, admin).await?;

    println!("📋 Collecting approved withdrawals...");
    let approved =
        withdrawals::list_withdrawals_by_status(db, &actor, WithdrawalStatus::Approved).await?;

    let file = File::create(&output)?;
    let mut writer = csv::Writer::from_writer(file);

    let mut total = 0i64;
    for withdrawal in &approved {
        total += withdrawal.amount;
        writer.serialize(PayoutRow {
            withdrawal_id: withdrawal.id,
            worker_id: withdrawal.worker_id,
            amount: withdrawal.amount,
            method: withdrawal.method.to_value(),
            payout_details: withdrawal.payout_details.clone(),
            approved_at: withdrawal
                .reviewed_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
        })?;
    }
    writer.flush()?;

    println!(
        "✅ Wrote {} payouts ({}) to {}",
        approved.len(),
        boostline_plans::money::format_kz(total),
        output.display()
    );
    Ok(())
}
