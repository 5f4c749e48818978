//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Scoring constants
pub const MS_PER_HOUR: f64 = 3_600_000.0;

// Database defaults
pub const DEFAULT_DB_FILE: &str = "dayscore.db";
pub const DEFAULT_POOL_SIZE: u32 = 10;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
