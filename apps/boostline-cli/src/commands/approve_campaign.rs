use boostline_engine::{campaigns, Actor};
use sea_orm::DatabaseConnection;

use crate::error::CliResult;

pub async fn execute(db: &DatabaseConnection, admin: i32, campaign: i32) -> CliResult<()> {
    let actor = Actor::load(db, admin).await?;
    let campaign = campaigns::approve_campaign(db, &actor, campaign).await?;

    println!(
        "✅ Campaign #{} is now active ({} slots open)",
        campaign.id, campaign.target_count
    );
    Ok(())
}
