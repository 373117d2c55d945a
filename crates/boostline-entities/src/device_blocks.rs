use sea_orm::entity::prelude::*;

/// Block-list keyed by device fingerprint. Any account whose fingerprint
/// appears here is treated as blocked, whether or not its own `blocked`
/// flag is set.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "device_blocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fingerprint: String,
    pub blocked_by: Option<i32>,
    pub blocked_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
