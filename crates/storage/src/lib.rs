//! Storage layer for the pocket guide catalog
//!
//! SQLite-backed, read-mostly reference data behind an r2d2 connection pool.
//! All query methods are synchronous; async callers bridge with
//! `spawn_blocking`.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use storage::{RawStatistics, RegionBirdRow, SeedReport, Storage};
