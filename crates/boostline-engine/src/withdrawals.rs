use boostline_entities::withdrawals::{self, WithdrawalMethod, WithdrawalStatus};
use boostline_plans::validate_withdrawal_request;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::info;

use crate::{
    actor::Actor,
    balance::worker_balance,
    error::{EngineError, EngineResult},
    notifications::notify,
};

/// Request a payout. The amount is checked against the balance projection
/// inside the transaction, so a request can never take the computed
/// balance negative.
pub async fn request_withdrawal(
    db: &DatabaseConnection,
    actor: &Actor,
    amount: i64,
    method: WithdrawalMethod,
    payout_details: &str,
) -> EngineResult<withdrawals::Model> {
    actor.require_worker()?;

    // 1. Shape checks (minimum amount, non-empty details)
    validate_withdrawal_request(amount, payout_details)?;

    let txn = db.begin().await?;

    // 2. One pending request at a time
    let has_pending = withdrawals::Entity::find()
        .filter(withdrawals::Column::WorkerId.eq(actor.account_id))
        .filter(withdrawals::Column::Status.eq(WithdrawalStatus::Pending))
        .one(&txn)
        .await?
        .is_some();
    if has_pending {
        return Err(EngineError::Validation(
            "a withdrawal is already pending".to_string(),
        ));
    }

    // 3. Never exceed the computed balance
    let balance = worker_balance(&txn, actor.account_id).await?;
    if amount > balance.available {
        return Err(EngineError::InsufficientBalance {
            requested: amount,
            available: balance.available,
        });
    }

    // 4. Create the pending row
    let withdrawal = withdrawals::ActiveModel {
        worker_id: Set(actor.account_id),
        amount: Set(amount),
        method: Set(method),
        payout_details: Set(payout_details.to_string()),
        status: Set(WithdrawalStatus::Pending),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    info!(
        withdrawal = withdrawal.id,
        worker = actor.account_id,
        amount,
        "withdrawal requested"
    );
    Ok(withdrawal)
}

/// Approve a payout: `pending` → `approved`. The balance projection
/// reflects the debit from this point on.
pub async fn approve_withdrawal(
    db: &DatabaseConnection,
    actor: &Actor,
    withdrawal_id: i32,
) -> EngineResult<withdrawals::Model> {
    actor.require_admin()?;

    let txn = db.begin().await?;
    let withdrawal = find_withdrawal(&txn, withdrawal_id).await?;

    let flipped = withdrawals::Entity::update_many()
        .col_expr(
            withdrawals::Column::Status,
            Expr::value(WithdrawalStatus::Approved),
        )
        .col_expr(withdrawals::Column::ReviewedAt, Expr::value(Some(Utc::now())))
        .col_expr(
            withdrawals::Column::ReviewedBy,
            Expr::value(Some(actor.account_id)),
        )
        .filter(withdrawals::Column::Id.eq(withdrawal_id))
        .filter(withdrawals::Column::Status.eq(WithdrawalStatus::Pending))
        .exec(&txn)
        .await?;
    if flipped.rows_affected == 0 {
        return Err(invalid_state(&withdrawal));
    }

    notify(
        &txn,
        withdrawal.worker_id,
        "Withdrawal approved",
        format!("Your withdrawal of {} was approved.", withdrawal.amount),
    )
    .await?;

    let withdrawal = find_withdrawal(&txn, withdrawal_id).await?;
    txn.commit().await?;
    info!(withdrawal = withdrawal.id, "withdrawal approved");
    Ok(withdrawal)
}

/// Refuse a payout: `pending` → `rejected`, reason required. No debit is
/// ever applied for a rejected request.
pub async fn reject_withdrawal(
    db: &DatabaseConnection,
    actor: &Actor,
    withdrawal_id: i32,
    reason: &str,
) -> EngineResult<withdrawals::Model> {
    actor.require_admin()?;
    if reason.trim().is_empty() {
        return Err(EngineError::Validation(
            "a rejection reason is required".to_string(),
        ));
    }

    let txn = db.begin().await?;
    let withdrawal = find_withdrawal(&txn, withdrawal_id).await?;

    let flipped = withdrawals::Entity::update_many()
        .col_expr(
            withdrawals::Column::Status,
            Expr::value(WithdrawalStatus::Rejected),
        )
        .col_expr(withdrawals::Column::ReviewedAt, Expr::value(Some(Utc::now())))
        .col_expr(
            withdrawals::Column::ReviewedBy,
            Expr::value(Some(actor.account_id)),
        )
        .col_expr(
            withdrawals::Column::RejectionReason,
            Expr::value(Some(reason.to_string())),
        )
        .filter(withdrawals::Column::Id.eq(withdrawal_id))
        .filter(withdrawals::Column::Status.eq(WithdrawalStatus::Pending))
        .exec(&txn)
        .await?;
    if flipped.rows_affected == 0 {
        return Err(invalid_state(&withdrawal));
    }

    notify(
        &txn,
        withdrawal.worker_id,
        "Withdrawal rejected",
        format!("Your withdrawal was rejected: {reason}"),
    )
    .await?;

    let withdrawal = find_withdrawal(&txn, withdrawal_id).await?;
    txn.commit().await?;
    info!(withdrawal = withdrawal.id, "withdrawal rejected");
    Ok(withdrawal)
}

/// The calling worker's withdrawal history, newest first.
pub async fn list_withdrawals_for_worker<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
) -> EngineResult<Vec<withdrawals::Model>> {
    actor.require_worker()?;
    Ok(withdrawals::Entity::find()
        .filter(withdrawals::Column::WorkerId.eq(actor.account_id))
        .order_by_desc(withdrawals::Column::CreatedAt)
        .all(conn)
        .await?)
}

/// Admin payout queue or history for one status, oldest first.
pub async fn list_withdrawals_by_status<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
    status: WithdrawalStatus,
) -> EngineResult<Vec<withdrawals::Model>> {
    actor.require_admin()?;
    Ok(withdrawals::Entity::find()
        .filter(withdrawals::Column::Status.eq(status))
        .order_by_asc(withdrawals::Column::CreatedAt)
        .all(conn)
        .await?)
}

async fn find_withdrawal<C: ConnectionTrait>(
    conn: &C,
    withdrawal_id: i32,
) -> EngineResult<withdrawals::Model> {
    withdrawals::Entity::find_by_id(withdrawal_id)
        .one(conn)
        .await?
        .ok_or(EngineError::NotFound("withdrawal", withdrawal_id))
}

fn invalid_state(withdrawal: &withdrawals::Model) -> EngineError {
    use sea_orm::ActiveEnum;
    EngineError::InvalidState {
        entity: "withdrawal",
        expected: "pending",
        found: withdrawal.status.to_value(),
    }
}
