use boostline_engine::{campaigns, tasks, Actor};
use boostline_entities::accounts::Role;
use boostline_entities::campaigns::Model as Campaign;
use boostline_plans::money;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::error::CliResult;
use crate::parse;

pub async fn execute(db: &DatabaseConnection, account: i32, status: String) -> CliResult<()> {
    let actor = Actor::load(db, account).await?;

    let rows = match actor.role {
        Role::Admin => {
            let status = parse::campaign_status(&status)?;
            campaigns::list_campaigns_by_status(db, &actor, status).await?
        }
        Role::Client => campaigns::list_campaigns_for_client(db, &actor).await?,
        Role::Worker => tasks::list_available_campaigns(db, &actor).await?,
    };

    if rows.is_empty() {
        println!("No campaigns.");
        return Ok(());
    }

    for campaign in &rows {
        print_row(campaign);
    }
    println!("{} campaigns", rows.len());
    Ok(())
}

fn print_row(campaign: &Campaign) {
    println!(
        "  #{} [{}] {}, {}/{} done, {}/{} reserved, {}",
        campaign.id,
        campaign.status.to_value(),
        campaign.plan_name,
        campaign.completed_count,
        campaign.target_count,
        campaign.reserved_count,
        campaign.target_count,
        money::format_kz(campaign.total_price),
    );
}
