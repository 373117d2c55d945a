use boostline_entities::{
    accounts,
    campaigns::{self, CampaignStatus},
    tasks::{self, TaskStatus},
};
use boostline_plans::{reward_for, validate_proofs, ProofBundle};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::info;

use crate::{
    actor::Actor,
    campaigns::{complete_if_target_reached, find_campaign},
    error::{EngineError, EngineResult},
    moderation::ensure_not_blocked,
    notifications::notify,
};

/// Claim one slot of an active campaign for the calling worker.
///
/// The slot reservation is a conditional increment of `reserved_count`
/// guarded by `reserved_count < target_count`; when two workers race for
/// the last slot the second update matches zero rows and the claim fails
/// without a task row ever existing.
pub async fn claim_task(
    db: &DatabaseConnection,
    actor: &Actor,
    campaign_id: i32,
) -> EngineResult<tasks::Model> {
    actor.require_worker()?;

    let txn = db.begin().await?;

    // 1. Blocked workers (by account or by device) may not claim
    let worker = accounts::Entity::find_by_id(actor.account_id)
        .one(&txn)
        .await?
        .ok_or(EngineError::NotFound("account", actor.account_id))?;
    ensure_not_blocked(&txn, &worker).await?;

    // 2. The campaign must be live
    let campaign = find_campaign(&txn, campaign_id).await?;
    if campaign.status != CampaignStatus::Active {
        return Err(EngineError::CapacityExceeded);
    }

    // 3. At most one open task per (worker, campaign) pair
    let open_task = tasks::Entity::find()
        .filter(tasks::Column::CampaignId.eq(campaign_id))
        .filter(tasks::Column::WorkerId.eq(actor.account_id))
        .filter(tasks::Column::Status.is_in([TaskStatus::InProgress, TaskStatus::PendingReview]))
        .one(&txn)
        .await?;
    if open_task.is_some() {
        return Err(EngineError::AlreadyClaimed);
    }

    // 4. Reserve a slot; losing the race for the last one fails here
    let reserved = campaigns::Entity::update_many()
        .col_expr(
            campaigns::Column::ReservedCount,
            Expr::col(campaigns::Column::ReservedCount).add(1),
        )
        .filter(campaigns::Column::Id.eq(campaign_id))
        .filter(campaigns::Column::Status.eq(CampaignStatus::Active))
        .filter(campaigns::Column::ReservedCount.lt(campaign.target_count))
        .exec(&txn)
        .await?;
    if reserved.rows_affected == 0 {
        return Err(EngineError::CapacityExceeded);
    }

    // 5. Materialize the task with the reward fixed from the plan rate
    let task = tasks::ActiveModel {
        campaign_id: Set(campaign_id),
        worker_id: Set(actor.account_id),
        status: Set(TaskStatus::InProgress),
        reward_amount: Set(reward_for(campaign.plan_type)),
        assigned_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    info!(
        task = task.id,
        campaign = campaign_id,
        worker = actor.account_id,
        "task claimed"
    );
    Ok(task)
}

/// Submit proof URLs for a claimed task: `in_progress` → `pending_review`.
pub async fn submit_proofs(
    db: &DatabaseConnection,
    actor: &Actor,
    task_id: i32,
    proofs: ProofBundle,
) -> EngineResult<tasks::Model> {
    actor.require_worker()?;

    let txn = db.begin().await?;

    let task = find_owned_task(&txn, actor, task_id).await?;
    let campaign = find_campaign(&txn, task.campaign_id).await?;

    // Required proofs depend on the campaign plan
    validate_proofs(campaign.plan_type, &proofs)?;

    if task.status != TaskStatus::InProgress {
        return Err(invalid_state(&task, "in_progress"));
    }

    let mut active: tasks::ActiveModel = task.into();
    active.status = Set(TaskStatus::PendingReview);
    active.follow_proof_url = Set(proofs.follow);
    active.like_proof_url = Set(proofs.like);
    active.comment_proof_url = Set(proofs.comment);
    active.share_proof_url = Set(proofs.share);
    active.completed_at = Set(Some(Utc::now()));
    let task = active.update(&txn).await?;

    txn.commit().await?;
    info!(task = task.id, "proofs submitted");
    Ok(task)
}

/// Approve a reviewed task: `pending_review` → `approved`.
///
/// Credits the worker implicitly (the balance is a projection over
/// approved tasks) and settles one campaign slot, flipping the campaign to
/// `completed` in the same transaction when the last slot settles.
pub async fn approve_task(
    db: &DatabaseConnection,
    actor: &Actor,
    task_id: i32,
) -> EngineResult<tasks::Model> {
    actor.require_admin()?;

    let txn = db.begin().await?;
    let task = find_task(&txn, task_id).await?;

    // 1. Guarded status flip; a concurrent reviewer loses here
    let flipped = tasks::Entity::update_many()
        .col_expr(tasks::Column::Status, Expr::value(TaskStatus::Approved))
        .col_expr(tasks::Column::ReviewedAt, Expr::value(Some(Utc::now())))
        .col_expr(
            tasks::Column::ReviewedBy,
            Expr::value(Some(actor.account_id)),
        )
        .filter(tasks::Column::Id.eq(task_id))
        .filter(tasks::Column::Status.eq(TaskStatus::PendingReview))
        .exec(&txn)
        .await?;
    if flipped.rows_affected == 0 {
        return Err(invalid_state(&task, "pending_review"));
    }

    // 2. Settle one campaign slot, bounded by the target
    let campaign = find_campaign(&txn, task.campaign_id).await?;
    let settled = campaigns::Entity::update_many()
        .col_expr(
            campaigns::Column::CompletedCount,
            Expr::col(campaigns::Column::CompletedCount).add(1),
        )
        .filter(campaigns::Column::Id.eq(task.campaign_id))
        .filter(campaigns::Column::CompletedCount.lt(campaign.target_count))
        .exec(&txn)
        .await?;
    if settled.rows_affected == 0 {
        // Reservation accounting should make this unreachable
        return Err(EngineError::CapacityExceeded);
    }

    // 3. Auto-complete check, atomic with the increment above
    complete_if_target_reached(&txn, task.campaign_id).await?;

    notify(
        &txn,
        task.worker_id,
        "Task approved",
        format!("Your task was approved. {} credited.", task.reward_amount),
    )
    .await?;

    let task = find_task(&txn, task_id).await?;
    txn.commit().await?;
    info!(task = task.id, campaign = task.campaign_id, "task approved");
    Ok(task)
}

/// Reject a reviewed task: `pending_review` → `rejected`, reason required.
///
/// The reserved slot stays consumed and `completed_count` is untouched.
pub async fn reject_task(
    db: &DatabaseConnection,
    actor: &Actor,
    task_id: i32,
    reason: &str,
) -> EngineResult<tasks::Model> {
    actor.require_admin()?;
    if reason.trim().is_empty() {
        return Err(EngineError::Validation(
            "a rejection reason is required".to_string(),
        ));
    }

    let txn = db.begin().await?;
    let task = find_task(&txn, task_id).await?;

    let flipped = tasks::Entity::update_many()
        .col_expr(tasks::Column::Status, Expr::value(TaskStatus::Rejected))
        .col_expr(tasks::Column::ReviewedAt, Expr::value(Some(Utc::now())))
        .col_expr(
            tasks::Column::ReviewedBy,
            Expr::value(Some(actor.account_id)),
        )
        .col_expr(
            tasks::Column::RejectionReason,
            Expr::value(Some(reason.to_string())),
        )
        .filter(tasks::Column::Id.eq(task_id))
        .filter(tasks::Column::Status.eq(TaskStatus::PendingReview))
        .exec(&txn)
        .await?;
    if flipped.rows_affected == 0 {
        return Err(invalid_state(&task, "pending_review"));
    }

    notify(
        &txn,
        task.worker_id,
        "Task rejected",
        format!("Your task was rejected: {reason}"),
    )
    .await?;

    let task = find_task(&txn, task_id).await?;
    txn.commit().await?;
    info!(task = task.id, "task rejected");
    Ok(task)
}

/// Campaigns the calling worker could claim right now: active, unreserved
/// capacity left, and no open task for this worker. This is the virtual
/// `available` state; nothing is stored for it.
pub async fn list_available_campaigns<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
) -> EngineResult<Vec<campaigns::Model>> {
    actor.require_worker()?;

    let open: std::collections::HashSet<i32> = tasks::Entity::find()
        .filter(tasks::Column::WorkerId.eq(actor.account_id))
        .filter(tasks::Column::Status.is_in([TaskStatus::InProgress, TaskStatus::PendingReview]))
        .all(conn)
        .await?
        .into_iter()
        .map(|task| task.campaign_id)
        .collect();

    let candidates = campaigns::Entity::find()
        .filter(campaigns::Column::Status.eq(CampaignStatus::Active))
        .filter(
            Expr::col(campaigns::Column::ReservedCount)
                .lt(Expr::col(campaigns::Column::TargetCount)),
        )
        .order_by_asc(campaigns::Column::CreatedAt)
        .all(conn)
        .await?;

    Ok(candidates
        .into_iter()
        .filter(|campaign| !open.contains(&campaign.id))
        .collect())
}

/// The calling worker's tasks, newest first.
pub async fn list_tasks_for_worker<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
) -> EngineResult<Vec<tasks::Model>> {
    actor.require_worker()?;
    Ok(tasks::Entity::find()
        .filter(tasks::Column::WorkerId.eq(actor.account_id))
        .order_by_desc(tasks::Column::AssignedAt)
        .all(conn)
        .await?)
}

/// Admin review queue: every task awaiting a decision, oldest first.
pub async fn list_tasks_pending_review<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
) -> EngineResult<Vec<tasks::Model>> {
    actor.require_admin()?;
    Ok(tasks::Entity::find()
        .filter(tasks::Column::Status.eq(TaskStatus::PendingReview))
        .order_by_asc(tasks::Column::CompletedAt)
        .all(conn)
        .await?)
}

async fn find_task<C: ConnectionTrait>(conn: &C, task_id: i32) -> EngineResult<tasks::Model> {
    tasks::Entity::find_by_id(task_id)
        .one(conn)
        .await?
        .ok_or(EngineError::NotFound("task", task_id))
}

/// Workers only ever see their own tasks; someone else's task is reported
/// as not found rather than forbidden.
async fn find_owned_task<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
    task_id: i32,
) -> EngineResult<tasks::Model> {
    let task = find_task(conn, task_id).await?;
    if task.worker_id != actor.account_id {
        return Err(EngineError::NotFound("task", task_id));
    }
    Ok(task)
}

fn invalid_state(task: &tasks::Model, expected: &'static str) -> EngineError {
    use sea_orm::ActiveEnum;
    EngineError::InvalidState {
        entity: "task",
        expected,
        found: task.status.to_value(),
    }
}
