use boostline_engine::{moderation, Actor};
use sea_orm::DatabaseConnection;

use crate::error::CliResult;

pub async fn execute(
    db: &DatabaseConnection,
    admin: i32,
    account: i32,
    reason: String,
) -> CliResult<()> {
    let actor = Actor::load(db, admin).await?;
    let account = moderation::block_account(db, &actor, account, &reason).await?;

    println!("⛔ Account #{} ({}) blocked: {reason}", account.id, account.email);
    if account.device_fingerprint.is_some() {
        println!("  Device fingerprint added to the block-list");
    }
    Ok(())
}
