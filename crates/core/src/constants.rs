//! Shared constants for the catalog API.

/// District value (and substring) marking a statewide aggregate row.
///
/// A query without a district, or with a district equal to this sentinel,
/// selects only frequency rows whose district CONTAINS this word. Rows are
/// stored as "Statewide" or variants containing it.
pub const STATEWIDE_SENTINEL: &str = "Statewide";

/// Grouping bucket for species with a missing category.
pub const FALLBACK_CATEGORY: &str = "Other Birds";

/// Language key seeded into every bird's name map.
pub const ENGLISH_LANGUAGE: &str = "English";

/// Default size of the SQLite connection pool.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;
