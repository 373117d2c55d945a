use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    Db(#[from] boostline_db::DbError),

    #[error("{0}")]
    Engine(#[from] boostline_engine::EngineError),

    #[error("Database error: {0}")]
    SeaOrm(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Plan(#[from] boostline_plans::PlanError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
