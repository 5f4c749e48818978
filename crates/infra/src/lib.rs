//! # DayScore Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite-backed repository implementations
//! - Connection pooling and schema management
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements traits defined in `dayscore-core`
//! - Depends on `dayscore-domain` and `dayscore-core`
//! - Contains all "impure" code (filesystem, database, environment)

pub mod config;
pub mod context;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use context::*;
pub use database::*;
pub use errors::*;
