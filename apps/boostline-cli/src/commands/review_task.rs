use boostline_engine::{tasks, Actor};
use boostline_plans::money;
use sea_orm::DatabaseConnection;

use crate::error::{CliError, CliResult};

pub async fn execute(
    db: &DatabaseConnection,
    admin: i32,
    task: i32,
    decision: String,
    reason: Option<String>,
) -> CliResult<()> {
    let actor = Actor::load(db, admin).await?;

    match decision.to_ascii_lowercase().as_str() {
        "approve" => {
            let task = tasks::approve_task(db, &actor, task).await?;
            println!(
                "✅ Task #{} approved, {} credited to worker #{}",
                task.id,
                money::format_kz(task.reward_amount),
                task.worker_id
            );
        }
        "reject" => {
            let reason = reason.ok_or_else(|| {
                CliError::InvalidArgument("--reason is required when rejecting".to_string())
            })?;
            let task = tasks::reject_task(db, &actor, task, &reason).await?;
            println!("🚫 Task #{} rejected: {reason}", task.id);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown decision '{other}' (expected approve or reject)"
            )));
        }
    }
    Ok(())
}
