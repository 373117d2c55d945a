use boostline_entities::{
    tasks::{self, TaskStatus},
    withdrawals::{self, WithdrawalStatus},
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::error::EngineResult;

/// A worker's money position, derived on demand.
///
/// There is no stored balance column anywhere: `available` is always
/// recomputed as approved rewards minus approved withdrawals, which keeps a
/// double-credit from ever being representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceSummary {
    /// Spendable now: total_earned - total_withdrawn.
    pub available: i64,
    /// Sum of rewards for approved tasks.
    pub total_earned: i64,
    /// Rewards for tasks still in review, not yet spendable.
    pub pending_earnings: i64,
    /// Sum of approved withdrawal amounts.
    pub total_withdrawn: i64,
}

/// Compute the balance projection for one worker.
pub async fn worker_balance<C: ConnectionTrait>(
    conn: &C,
    worker_id: i32,
) -> EngineResult<BalanceSummary> {
    let mut total_earned = 0i64;
    let mut pending_earnings = 0i64;

    let worker_tasks = tasks::Entity::find()
        .filter(tasks::Column::WorkerId.eq(worker_id))
        .all(conn)
        .await?;
    for task in &worker_tasks {
        match task.status {
            TaskStatus::Approved => total_earned += task.reward_amount,
            TaskStatus::PendingReview => pending_earnings += task.reward_amount,
            TaskStatus::InProgress | TaskStatus::Rejected => {}
        }
    }

    let total_withdrawn = withdrawals::Entity::find()
        .filter(withdrawals::Column::WorkerId.eq(worker_id))
        .filter(withdrawals::Column::Status.eq(WithdrawalStatus::Approved))
        .all(conn)
        .await?
        .iter()
        .map(|w| w.amount)
        .sum::<i64>();

    Ok(BalanceSummary {
        available: total_earned - total_withdrawn,
        total_earned,
        pending_earnings,
        total_withdrawn,
    })
}
