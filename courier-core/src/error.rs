//! Error types for the courier core.
//!
//! [`CourierError`] is the service-level taxonomy; storage failures are
//! mapped onto it rather than wrapped opaquely.

use storage::StorageError;
use thiserror::Error;

/// Failures a service operation can signal to its caller.
#[derive(Error, Debug)]
pub enum CourierError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Auth error: {0}")]
    Auth(String),
}

impl From<StorageError> for CourierError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(s) => CourierError::NotFound(s),
            StorageError::AlreadyExists(s) => CourierError::Conflict(s),
            StorageError::InvalidReference(s) => CourierError::InvalidReference(s),
            StorageError::Database(s) => CourierError::Database(s),
        }
    }
}

/// Result type for core operations; uses [`CourierError`].
pub type Result<T> = std::result::Result<T, CourierError>;
