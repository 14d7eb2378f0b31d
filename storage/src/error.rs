//! Storage error types.
//!
//! Used by repository implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

impl StorageError {
    /// Classifies an sqlx error once, at the repository boundary.
    ///
    /// UNIQUE violations become [`StorageError::AlreadyExists`] and foreign
    /// key violations become [`StorageError::InvalidReference`]; `context`
    /// names the entity involved so callers get a readable message.
    pub fn from_sqlx(err: sqlx::Error, context: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StorageError::AlreadyExists(context.to_string());
            }
            if db_err.is_foreign_key_violation() {
                return StorageError::InvalidReference(context.to_string());
            }
        }
        StorageError::Database(err.to_string())
    }
}
