use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A worker's request to pay out part of their computed balance.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "withdrawals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub worker_id: i32,
    /// Whole kwanzas.
    pub amount: i64,
    pub method: WithdrawalMethod,
    /// Method-specific payout coordinates (IBAN or wallet number), opaque
    /// to the engine.
    pub payout_details: String,
    pub status: WithdrawalStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub reviewed_at: Option<DateTimeUtc>,
    pub reviewed_by: Option<i32>,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalMethod {
    #[sea_orm(string_value = "iban")]
    Iban,
    #[sea_orm(string_value = "mobile_wallet")]
    MobileWallet,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Paid; the amount now debits the computed balance. Terminal.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Refused; the balance is untouched. Terminal.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
