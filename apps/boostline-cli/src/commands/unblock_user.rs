use boostline_engine::{moderation, Actor};
use sea_orm::DatabaseConnection;

use crate::error::CliResult;

pub async fn execute(db: &DatabaseConnection, admin: i32, account: i32) -> CliResult<()> {
    let actor = Actor::load(db, admin).await?;
    let account = moderation::unblock_account(db, &actor, account).await?;

    println!("✅ Account #{} ({}) unblocked", account.id, account.email);
    Ok(())
}
