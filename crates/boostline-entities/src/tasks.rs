use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One worker's claimed unit of work against a campaign.
///
/// There is no stored `available` status: availability is the set of
/// (worker, active campaign) pairs with no row here and capacity left.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campaign_id: i32,
    pub worker_id: i32,
    pub status: TaskStatus,
    /// Whole kwanzas, fixed from the campaign plan rate at claim time.
    pub reward_amount: i64,
    pub follow_proof_url: Option<String>,
    pub like_proof_url: Option<String>,
    pub comment_proof_url: Option<String>,
    pub share_proof_url: Option<String>,
    pub assigned_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
    pub reviewed_at: Option<DateTimeUtc>,
    pub reviewed_by: Option<i32>,
    pub rejection_reason: Option<String>,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Claimed, waiting for the worker to submit proofs.
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Proofs submitted, waiting for admin review.
    #[sea_orm(string_value = "pending_review")]
    PendingReview,
    /// Reviewed and paid out into the worker's balance. Terminal.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Reviewed and refused; the campaign slot stays consumed. Terminal.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl TaskStatus {
    /// A terminal task no longer blocks the (worker, campaign) pair.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
