use boostline_engine::{tasks, Actor};
use boostline_entities::accounts::Role;
use boostline_entities::tasks::Model as Task;
use boostline_plans::money;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::error::{CliError, CliResult};

/// Admins see the review queue (oldest first); workers see their own task
/// history.
pub async fn execute(db: &DatabaseConnection, account: i32) -> CliResult<()> {
    let actor = Actor::load(db, account).await?;

    let rows = match actor.role {
        Role::Admin => tasks::list_tasks_pending_review(db, &actor).await?,
        Role::Worker => tasks::list_tasks_for_worker(db, &actor).await?,
        Role::Client => {
            return Err(CliError::InvalidArgument(
                "clients have no task view; use list-campaigns".to_string(),
            ));
        }
    };

    if rows.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    for task in &rows {
        print_row(task);
    }
    println!("{} tasks", rows.len());
    Ok(())
}

fn print_row(task: &Task) {
    println!(
        "  #{} [{}] campaign #{}, worker #{}, reward {}",
        task.id,
        task.status.to_value(),
        task.campaign_id,
        task.worker_id,
        money::format_kz(task.reward_amount),
    );
}
