use boostline_engine::{balance, Actor};
use boostline_plans::money::format_kz;
use sea_orm::DatabaseConnection;

use crate::error::{CliError, CliResult};

pub async fn execute(db: &DatabaseConnection, worker: i32) -> CliResult<()> {
    let actor = Actor::load(db, worker).await?;
    actor
        .require_worker()
        .map_err(CliError::Engine)?;

    let summary = balance::worker_balance(db, actor.account_id).await?;

    println!("💰 Balance for worker #{worker}");
    println!("  Available:        {}", format_kz(summary.available));
    println!("  Total earned:     {}", format_kz(summary.total_earned));
    println!("  Pending review:   {}", format_kz(summary.pending_earnings));
    println!("  Total withdrawn:  {}", format_kz(summary.total_withdrawn));
    Ok(())
}
