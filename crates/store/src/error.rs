//! Document store error types.

use thiserror::Error;

/// Document store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("malformed document: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<bson::document::ValueAccessError> for StoreError {
    fn from(err: bson::document::ValueAccessError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<docket_core::Error> for StoreError {
    fn from(err: docket_core::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for document store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
