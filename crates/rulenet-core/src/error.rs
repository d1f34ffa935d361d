use thiserror::Error;

/// Top-level error type for the RuleNet graph tools.
#[derive(Error, Debug)]
pub enum RuleNetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid Cypher identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid export: {0}")]
    InvalidExport(String),
}

pub type Result<T> = std::result::Result<T, RuleNetError>;
