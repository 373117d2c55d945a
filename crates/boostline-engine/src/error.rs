use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Every operation failure surfaced to callers. No variant is retried by
/// the engine itself; a failed operation leaves all state unchanged.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} is not {expected} (found {found})")]
    InvalidState {
        entity: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Worker already holds an open task for this campaign")]
    AlreadyClaimed,

    #[error("Campaign has no remaining capacity")]
    CapacityExceeded,

    #[error("Account is blocked: {0}")]
    BlockedAccount(String),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: i64, available: i64 },

    #[error("{0} {1} not found")]
    NotFound(&'static str, i32),

    #[error("Operation requires the {0} role")]
    Unauthorized(&'static str),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl From<boostline_plans::PlanError> for EngineError {
    fn from(err: boostline_plans::PlanError) -> Self {
        EngineError::Validation(err.to_string())
    }
}
