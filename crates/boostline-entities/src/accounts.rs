use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An account is never hard-deleted; moderation flips the `blocked` flag
/// instead so history stays attributable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// Stable device identifier captured at signup, used to propagate
    /// blocks across accounts sharing a device.
    pub device_fingerprint: Option<String>,
    pub blocked: bool,
    pub blocked_reason: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "client")]
    Client,
    #[sea_orm(string_value = "worker")]
    Worker,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
