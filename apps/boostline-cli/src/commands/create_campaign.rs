use boostline_engine::{campaigns, Actor};
use boostline_plans::{money, CampaignRequest};
use sea_orm::DatabaseConnection;

use crate::error::CliResult;
use crate::parse;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    db: &DatabaseConnection,
    client: i32,
    plan_type: String,
    plan: String,
    platform: String,
    target_link: String,
    profile_link: Option<String>,
    video_link: Option<String>,
) -> CliResult<()> {
    let actor = Actor::load(db, client).await?;

    let request = CampaignRequest {
        plan_type: parse::plan_type(&plan_type)?,
        plan_name: plan,
        platform: parse::platform(&platform)?,
        target_link,
        profile_link,
        video_link,
    };

    let campaign = campaigns::create_campaign(db, &actor, request).await?;

    println!("🚀 Campaign #{} created ({})", campaign.id, campaign.plan_name);
    println!("  Target: {} tasks", campaign.target_count);
    println!("  Price: {}", money::format_kz(campaign.total_price));
    println!("  Status: pending_payment (awaiting payment confirmation)");
    Ok(())
}
