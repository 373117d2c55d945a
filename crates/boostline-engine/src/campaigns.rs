use boostline_entities::{
    accounts,
    campaigns::{self, CampaignStatus},
};
use boostline_plans::{validate_campaign_request, CampaignRequest};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::info;

use crate::{
    actor::Actor,
    error::{EngineError, EngineResult},
    moderation::ensure_not_blocked,
    notifications::notify,
};

/// Create a campaign in `pending_payment`.
///
/// Target count and price are fixed from the catalog tier, never taken
/// from the request. No tasks exist until workers claim against the
/// approved campaign.
pub async fn create_campaign(
    db: &DatabaseConnection,
    actor: &Actor,
    request: CampaignRequest,
) -> EngineResult<campaigns::Model> {
    actor.require_client()?;

    // 1. Shape checks before touching any row
    let tier = validate_campaign_request(&request)?;

    let txn = db.begin().await?;

    // 2. Blocked clients may not spend
    let client = accounts::Entity::find_by_id(actor.account_id)
        .one(&txn)
        .await?
        .ok_or(EngineError::NotFound("account", actor.account_id))?;
    ensure_not_blocked(&txn, &client).await?;

    // 3. At most one campaign awaiting payment per client
    let has_pending = campaigns::Entity::find()
        .filter(campaigns::Column::ClientId.eq(actor.account_id))
        .filter(campaigns::Column::Status.eq(CampaignStatus::PendingPayment))
        .one(&txn)
        .await?
        .is_some();
    if has_pending {
        return Err(EngineError::Validation(
            "client already has a campaign awaiting payment".to_string(),
        ));
    }

    // 4. Create the row
    let campaign = campaigns::ActiveModel {
        client_id: Set(actor.account_id),
        plan_type: Set(request.plan_type),
        plan_name: Set(tier.name.to_string()),
        platform: Set(request.platform),
        target_link: Set(request.target_link),
        profile_link: Set(request.profile_link),
        video_link: Set(request.video_link),
        target_count: Set(tier.target_count),
        reserved_count: Set(0),
        completed_count: Set(0),
        total_price: Set(tier.price),
        status: Set(CampaignStatus::PendingPayment),
        payment_confirmed_at: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    info!(
        campaign = campaign.id,
        client = campaign.client_id,
        plan = %campaign.plan_name,
        "campaign created"
    );
    Ok(campaign)
}

/// Confirm payment: `pending_payment` → `active`.
pub async fn approve_campaign(
    db: &DatabaseConnection,
    actor: &Actor,
    campaign_id: i32,
) -> EngineResult<campaigns::Model> {
    actor.require_admin()?;

    let txn = db.begin().await?;
    let campaign = find_campaign(&txn, campaign_id).await?;

    let flipped = campaigns::Entity::update_many()
        .col_expr(campaigns::Column::Status, Expr::value(CampaignStatus::Active))
        .col_expr(
            campaigns::Column::PaymentConfirmedAt,
            Expr::value(Some(Utc::now())),
        )
        .filter(campaigns::Column::Id.eq(campaign_id))
        .filter(campaigns::Column::Status.eq(CampaignStatus::PendingPayment))
        .exec(&txn)
        .await?;
    if flipped.rows_affected == 0 {
        return Err(invalid_state(&campaign, "pending_payment"));
    }

    notify(
        &txn,
        campaign.client_id,
        "Payment confirmed",
        format!(
            "Your {} campaign is now live and open to workers.",
            campaign.plan_name
        ),
    )
    .await?;

    let campaign = find_campaign(&txn, campaign_id).await?;
    txn.commit().await?;
    info!(campaign = campaign.id, "campaign approved");
    Ok(campaign)
}

/// Refuse payment: `pending_payment` → `cancelled`, reason required.
pub async fn reject_campaign(
    db: &DatabaseConnection,
    actor: &Actor,
    campaign_id: i32,
    reason: &str,
) -> EngineResult<campaigns::Model> {
    cancel_from(db, actor, campaign_id, reason, CampaignStatus::PendingPayment).await
}

/// Admin escape hatch: `active` → `cancelled`, reason required.
pub async fn cancel_campaign(
    db: &DatabaseConnection,
    actor: &Actor,
    campaign_id: i32,
    reason: &str,
) -> EngineResult<campaigns::Model> {
    cancel_from(db, actor, campaign_id, reason, CampaignStatus::Active).await
}

async fn cancel_from(
    db: &DatabaseConnection,
    actor: &Actor,
    campaign_id: i32,
    reason: &str,
    expected: CampaignStatus,
) -> EngineResult<campaigns::Model> {
    actor.require_admin()?;
    if reason.trim().is_empty() {
        return Err(EngineError::Validation(
            "a cancellation reason is required".to_string(),
        ));
    }

    let txn = db.begin().await?;
    let campaign = find_campaign(&txn, campaign_id).await?;

    let flipped = campaigns::Entity::update_many()
        .col_expr(
            campaigns::Column::Status,
            Expr::value(CampaignStatus::Cancelled),
        )
        .filter(campaigns::Column::Id.eq(campaign_id))
        .filter(campaigns::Column::Status.eq(expected))
        .exec(&txn)
        .await?;
    if flipped.rows_affected == 0 {
        return Err(invalid_state(&campaign, expected_label(expected)));
    }

    notify(
        &txn,
        campaign.client_id,
        "Campaign cancelled",
        format!("Your {} campaign was cancelled: {reason}", campaign.plan_name),
    )
    .await?;

    let campaign = find_campaign(&txn, campaign_id).await?;
    txn.commit().await?;
    info!(campaign = campaign.id, "campaign cancelled");
    Ok(campaign)
}

/// Flip an active campaign to `completed` once every slot is settled.
/// Runs inside the task-approval transaction so the increment and the
/// completion are observed atomically.
pub(crate) async fn complete_if_target_reached<C: ConnectionTrait>(
    conn: &C,
    campaign_id: i32,
) -> EngineResult<bool> {
    let campaign = find_campaign(conn, campaign_id).await?;
    if campaign.status != CampaignStatus::Active
        || campaign.completed_count < campaign.target_count
    {
        return Ok(false);
    }

    let flipped = campaigns::Entity::update_many()
        .col_expr(
            campaigns::Column::Status,
            Expr::value(CampaignStatus::Completed),
        )
        .filter(campaigns::Column::Id.eq(campaign_id))
        .filter(campaigns::Column::Status.eq(CampaignStatus::Active))
        .exec(conn)
        .await?;
    if flipped.rows_affected == 0 {
        return Ok(false);
    }

    notify(
        conn,
        campaign.client_id,
        "Campaign completed",
        format!(
            "Your {} campaign reached its target of {}.",
            campaign.plan_name, campaign.target_count
        ),
    )
    .await?;

    info!(campaign = campaign.id, "campaign completed");
    Ok(true)
}

/// A client's own campaigns, newest first.
pub async fn list_campaigns_for_client<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
) -> EngineResult<Vec<campaigns::Model>> {
    actor.require_client()?;
    Ok(campaigns::Entity::find()
        .filter(campaigns::Column::ClientId.eq(actor.account_id))
        .order_by_desc(campaigns::Column::CreatedAt)
        .all(conn)
        .await?)
}

/// Admin view over every campaign in a given status.
pub async fn list_campaigns_by_status<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
    status: CampaignStatus,
) -> EngineResult<Vec<campaigns::Model>> {
    actor.require_admin()?;
    Ok(campaigns::Entity::find()
        .filter(campaigns::Column::Status.eq(status))
        .order_by_desc(campaigns::Column::CreatedAt)
        .all(conn)
        .await?)
}

pub(crate) async fn find_campaign<C: ConnectionTrait>(
    conn: &C,
    campaign_id: i32,
) -> EngineResult<campaigns::Model> {
    campaigns::Entity::find_by_id(campaign_id)
        .one(conn)
        .await?
        .ok_or(EngineError::NotFound("campaign", campaign_id))
}

fn invalid_state(campaign: &campaigns::Model, expected: &'static str) -> EngineError {
    use sea_orm::ActiveEnum;
    EngineError::InvalidState {
        entity: "campaign",
        expected,
        found: campaign.status.to_value(),
    }
}

fn expected_label(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::PendingPayment => "pending_payment",
        CampaignStatus::Active => "active",
        CampaignStatus::Completed => "completed",
        CampaignStatus::Cancelled => "cancelled",
    }
}
