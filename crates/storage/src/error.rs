//! Typed error enum for the storage layer.
//!
//! Replaces `anyhow::Result` in the storage API so callers can match on
//! specific failure modes (not found, pool exhaustion, SQL errors) instead
//! of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// SQL execution or row-mapping failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Could not obtain a connection from the pool.
    #[error("connection pool error: {0}")]
    Pool(String),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Custom `From<rusqlite::Error>` — NOT blanket `#[from]`.
///
/// `QueryReturnedNoRows` → `NotFound` (generic; callers should catch and
/// remap with entity context). Everything else → `Database`.
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => {
                Self::NotFound { entity: "row", id: "unknown".into() }
            },
            _ => Self::Database(err),
        }
    }
}

impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Pool(err.to_string())
    }
}
