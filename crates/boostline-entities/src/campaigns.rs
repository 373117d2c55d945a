use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A paid promotion order owned by one client.
///
/// Capacity accounting uses two counters: `reserved_count` moves when a
/// worker claims a slot, `completed_count` moves when an admin approves the
/// finished task. Both are bounded by `target_count`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub plan_type: PlanType,
    pub plan_name: String,
    pub platform: Platform,
    pub target_link: String,
    pub profile_link: Option<String>,
    pub video_link: Option<String>,
    pub target_count: i32,
    pub reserved_count: i32,
    pub completed_count: i32,
    /// Whole kwanzas, fixed by the plan tier at creation.
    pub total_price: i64,
    pub status: CampaignStatus,
    pub payment_confirmed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Followers only; a task needs a single follow proof.
    #[sea_orm(string_value = "follow_growth")]
    FollowGrowth,
    /// Follow + like + comment + share; a task needs all four proofs.
    #[sea_orm(string_value = "full_engagement")]
    FullEngagement,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[sea_orm(string_value = "facebook")]
    Facebook,
    #[sea_orm(string_value = "instagram")]
    Instagram,
    #[sea_orm(string_value = "tiktok")]
    Tiktok,
    #[sea_orm(string_value = "youtube")]
    Youtube,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// Created, waiting for the admin to confirm the offline payment.
    #[sea_orm(string_value = "pending_payment")]
    PendingPayment,
    /// Payment confirmed; workers may claim slots.
    #[sea_orm(string_value = "active")]
    Active,
    /// `completed_count` reached `target_count`. Terminal.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Rejected or cancelled by an admin. Terminal.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
