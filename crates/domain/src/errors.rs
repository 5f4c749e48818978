//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for DayScore
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DayscoreError {
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Category in use: {0}")]
    CategoryInUse(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DayscoreError {
    /// True for errors caused by malformed caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName(_)
                | Self::InvalidTimeRange(_)
                | Self::InvalidRange(_)
                | Self::InvalidInput(_)
        )
    }

    /// True for errors raised by referential-integrity guards.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::CategoryInUse(_) | Self::InvalidReference(_))
    }

    /// True for errors surfaced by the storage layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::StorageUnavailable(_))
    }

    /// True when retrying the same operation may succeed.
    ///
    /// Only transient storage failures (busy/locked database, exhausted
    /// pool) qualify. Retry policy belongs to callers; nothing in this
    /// workspace retries automatically.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type alias for DayScore operations
pub type Result<T> = std::result::Result<T, DayscoreError>;
