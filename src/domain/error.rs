//! Error types for the quiz store.
//!
//! Every repository operation surfaces one of these kinds to the caller;
//! nothing is retried or swallowed inside the storage layer.

use thiserror::Error;

/// Errors raised by the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted row does not exist (in any soft-delete state).
    #[error("Record not found: {table} id {id}")]
    NotFound { table: &'static str, id: i64 },

    /// The supplied fields are missing, unknown, or immutable.
    #[error("Invalid field input: {0}")]
    Validation(String),

    /// Stored contents could not be decoded. This signals data corruption
    /// and is not recoverable here.
    #[error("Stored contents could not be decoded: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store rejected or failed the statement.
    #[error("Database operation failed: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn not_found(table: &'static str, id: i64) -> Self {
        StoreError::NotFound { table, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
