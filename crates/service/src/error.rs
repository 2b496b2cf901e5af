//! Typed error enum for the service layer.

use pocketguide_storage::StorageError;
use thiserror::Error;

/// Service-layer error separating caller mistakes from store failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (SQL, pool, not found).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (missing/empty required parameter).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A region query matched zero frequency rows after filtering.
    /// Distinct from `InvalidInput`: the request was well-formed.
    #[error("no birds found for the selected region")]
    NoRegionData,
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NoRegionData => true,
            Self::Storage(e) => e.is_not_found(),
            Self::InvalidInput(_) => false,
        }
    }
}
