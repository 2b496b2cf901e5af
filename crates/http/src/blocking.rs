//! Helper for running the synchronous service layer in async handlers.
//!
//! Storage queries block on SQLite; handlers hand them to the blocking
//! thread pool instead of stalling the async runtime.

use axum::Json;
use serde::Serialize;
use tokio::task::spawn_blocking;

use pocketguide_service::ServiceError;

use crate::ApiError;

/// Runs a blocking closure and returns `Result<Json<T>, ApiError>`.
pub async fn blocking_json<T, F>(f: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static + Serialize,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("task join error: {e}")))?
        .map(Json)
        .map_err(ApiError::from)
}
