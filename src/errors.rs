use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("No transaction with id {0}")]
    NotFound(Uuid),
}

/// Convenience alias used across the crate's fallible APIs.
pub type StoreResult<T> = Result<T, StoreError>;
