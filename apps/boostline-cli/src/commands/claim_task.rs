use boostline_engine::{tasks, Actor};
use boostline_plans::{money, CLAIM_WINDOW_HOURS};
use sea_orm::DatabaseConnection;

use crate::error::CliResult;

pub async fn execute(db: &DatabaseConnection, worker: i32, campaign: i32) -> CliResult<()> {
    let actor = Actor::load(db, worker).await?;
    let task = tasks::claim_task(db, &actor, campaign).await?;

    println!(
        "📌 Task #{} claimed on campaign #{} (reward {})",
        task.id,
        task.campaign_id,
        money::format_kz(task.reward_amount)
    );
    println!("  Submit proofs within {CLAIM_WINDOW_HOURS} hours:");
    println!("    boostline submit-proofs --worker {worker} {}", task.id);
    Ok(())
}
