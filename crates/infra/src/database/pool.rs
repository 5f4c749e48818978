//! SQLite connection pool
//!
//! Provides r2d2-based connection pooling for the activity database. Every
//! connection handed out by the pool has the standard pragmas applied
//! through the manager's init hook.

use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use tracing::warn;

use crate::errors::{StorageError, StorageResult};

/// Pooled SQLite connection handle
pub type SqliteConnection = PooledConnection<SqliteConnectionManager>;

/// SQLite pool configuration
#[derive(Debug, Clone)]
pub struct SqlitePoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,

    /// Connection timeout
    pub connection_timeout: Duration,

    /// Busy timeout for SQLite operations
    pub busy_timeout: Duration,

    /// Enable WAL journal mode
    pub enable_wal: bool,

    /// Enable foreign key constraints
    pub enable_foreign_keys: bool,
}

impl Default for SqlitePoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_millis(5000),
            enable_wal: true,
            enable_foreign_keys: true,
        }
    }
}

/// Create a connection pool for the database at `path`.
///
/// # Process
/// 1. Create connection manager with a pragma init hook
/// 2. Build r2d2 pool with configured size and timeouts
/// 3. Return pool
///
/// # Errors
/// Returns an error if the database file can't be accessed or pool
/// creation fails.
pub fn create_pool(
    path: &Path,
    config: SqlitePoolConfig,
) -> StorageResult<Pool<SqliteConnectionManager>> {
    let pool_config = config.clone();

    let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
        apply_connection_pragmas(conn, &pool_config)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    });

    Pool::builder()
        .max_size(config.max_size)
        .connection_timeout(config.connection_timeout)
        .build(manager)
        .map_err(|e| {
            warn!("Failed to create connection pool: {e}");
            StorageError::Connection(format!("Failed to create pool: {e}"))
        })
}

/// Apply connection-level pragmas
///
/// These pragmas are applied to each connection in the pool:
/// - WAL mode for better concurrency
/// - NORMAL synchronous mode for balanced safety/performance
/// - WAL autocheckpoint for automatic checkpoint management
/// - Foreign key constraints enabled
/// - Busy timeout for handling lock contention
pub fn apply_connection_pragmas(
    conn: &Connection,
    config: &SqlitePoolConfig,
) -> StorageResult<()> {
    // Build pragma batch
    let mut pragma_sql = String::new();

    // Journal mode (WAL for concurrency)
    if config.enable_wal {
        pragma_sql.push_str("PRAGMA journal_mode=WAL;\n");
        // WAL autocheckpoint (checkpoint after 1000 pages)
        pragma_sql.push_str("PRAGMA wal_autocheckpoint=1000;\n");
    }

    // Synchronous mode (NORMAL for balance)
    pragma_sql.push_str("PRAGMA synchronous=NORMAL;\n");

    // Foreign keys
    if config.enable_foreign_keys {
        pragma_sql.push_str("PRAGMA foreign_keys=ON;\n");
    }

    // Execute pragma batch
    conn.execute_batch(&pragma_sql)
        .map_err(|e| StorageError::Query(format!("Failed to apply pragmas: {e}")))?;

    // Set busy timeout (separate call as it takes a parameter)
    conn.busy_timeout(config.busy_timeout)
        .map_err(|e| StorageError::Query(format!("Failed to set busy timeout: {e}")))?;

    Ok(())
}
