use thiserror::Error;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Unknown plan: {plan_name:?} is not a {plan_type} tier")]
    UnknownPlan { plan_type: String, plan_name: String },

    #[error("Invalid link: {0}")]
    InvalidLink(String),

    #[error("Missing {0} proof")]
    MissingProof(&'static str),

    #[error("Amount {amount} is below the withdrawal minimum {minimum}")]
    AmountBelowMinimum { amount: i64, minimum: i64 },

    #[error("Payout details must not be empty")]
    EmptyPayoutDetails,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
