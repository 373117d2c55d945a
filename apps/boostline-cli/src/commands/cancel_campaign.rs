use boostline_engine::{campaigns, Actor};
use sea_orm::DatabaseConnection;

use crate::error::CliResult;

pub async fn execute(
    db: &DatabaseConnection,
    admin: i32,
    campaign: i32,
    reason: String,
) -> CliResult<()> {
    let actor = Actor::load(db, admin).await?;
    let campaign = campaigns::cancel_campaign(db, &actor, campaign, &reason).await?;

    println!("🚫 Campaign #{} cancelled: {reason}", campaign.id);
    Ok(())
}
