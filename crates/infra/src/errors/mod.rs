//! Storage error types
//!
//! Defines error types for the storage layer and their conversions into
//! the domain error type. Repositories work in terms of [`StorageError`]
//! and surface [`dayscore_domain::DayscoreError`] at the port boundary.

pub mod conversions;

pub use conversions::map_sqlite_error;

use dayscore_domain::DayscoreError;
use thiserror::Error;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Database pool exhausted")]
    PoolExhausted,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Rusqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    R2d2(#[from] r2d2::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Check if this error is retryable
    ///
    /// Retryable errors include pool exhaustion, transient connection
    /// failures, and SQLite BUSY/LOCKED conditions.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::PoolExhausted => true,
            Self::Connection(_) => true,
            Self::R2d2(_) => true,
            Self::Rusqlite(err) => {
                matches!(
                    err.sqlite_error_code(),
                    Some(rusqlite::ErrorCode::DatabaseBusy)
                        | Some(rusqlite::ErrorCode::DatabaseLocked)
                )
            }
            _ => false,
        }
    }
}

impl From<StorageError> for DayscoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(msg) => DayscoreError::StorageUnavailable(msg),
            StorageError::Migration(msg) => {
                DayscoreError::StorageUnavailable(format!("schema migration failed: {msg}"))
            }
            StorageError::InvalidConfig(msg) => DayscoreError::Config(msg),
            StorageError::PoolExhausted => {
                DayscoreError::Storage("connection pool exhausted".into())
            }
            StorageError::Query(msg) => DayscoreError::Storage(msg),
            StorageError::Io(err) => DayscoreError::Storage(format!("io failure: {err}")),
            StorageError::R2d2(err) => {
                DayscoreError::Storage(format!("connection pool failure: {err}"))
            }
            StorageError::SerdeJson(err) => {
                DayscoreError::Storage(format!("corrupt stored payload: {err}"))
            }
            StorageError::Rusqlite(err) => map_sqlite_error(err),
        }
    }
}
