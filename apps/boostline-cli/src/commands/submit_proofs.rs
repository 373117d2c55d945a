use boostline_engine::{tasks, Actor};
use boostline_plans::ProofBundle;
use sea_orm::DatabaseConnection;

use crate::error::CliResult;

pub async fn execute(
    db: &DatabaseConnection,
    worker: i32,
    task: i32,
    follow: Option<String>,
    like: Option<String>,
    comment: Option<String>,
    share: Option<String>,
) -> CliResult<()> {
    let actor = Actor::load(db, worker).await?;

    let proofs = ProofBundle {
        follow,
        like,
        comment,
        share,
    };
    let task = tasks::submit_proofs(db, &actor, task, proofs).await?;

    println!("📤 Task #{} is now pending review", task.id);
    Ok(())
}
