//! `SQLite` storage implementation - modular structure
//!
//! One file per query family. All methods are synchronous; the HTTP layer
//! bridges with `spawn_blocking`.

// SQLite uses i64 for counts, Rust uses u64/usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "SQLite i64 <-> Rust u64 conversions are safe within DB row counts"
)]

mod locations;
mod region;
mod seed;
mod species;
mod stats;

use std::path::Path;

use pocketguide_core::{DEFAULT_DB_POOL_SIZE, env_parse_with_default};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::StorageError;
use crate::migrations;

pub use region::RegionBirdRow;
pub use seed::SeedReport;
pub use stats::RawStatistics;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Max bound variables per `IN (...)` query; stays well under SQLite's
/// default host-parameter limit.
pub(crate) const MAX_IN_PARAMS: usize = 500;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(StorageError::from)
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Build a `?,?,...` placeholder list for an `IN (...)` clause.
pub(crate) fn in_placeholders(count: usize) -> String {
    let mut s = String::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            s.push(',');
        }
        s.push('?');
    }
    s
}

/// Connection initializer for concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("POCKETGUIDE_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE)
}

impl Storage {
    /// Create new storage instance with `SQLite` connection pool
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        // Run migrations on first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(pool_size = pool_size, "Storage initialized with connection pool");

        Ok(Self { pool })
    }
}
