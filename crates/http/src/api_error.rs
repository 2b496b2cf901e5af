//! Typed API error for HTTP handlers.
//!
//! Converts service errors into proper HTTP responses with JSON body and
//! status codes. Handlers return `Result<Json<T>, ApiError>` instead of
//! losing error context with bare `StatusCode`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pocketguide_core::env_flag;
use pocketguide_service::ServiceError;
use pocketguide_storage::StorageError;

/// API error with HTTP status code and JSON body.
///
/// `Internal` logs the real error server-side; the failure text reaches the
/// client only when `POCKETGUIDE_DEBUG_ERRORS` is enabled — leaking store
/// errors is a debug convenience, not a stable contract.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — missing/invalid required parameter.
    BadRequest(String),
    /// 401 Unauthorized — admin bearer token missing or wrong.
    Unauthorized,
    /// 404 Not Found — unknown identifier. Body: `{"error": msg}`.
    NotFound(String),
    /// 404 Not Found — a well-formed region query matched nothing.
    /// Body: `{"message": ...}` (legacy wire shape, preserved).
    NoRegionData,
    /// 500 Internal Server Error — store/connectivity failure.
    Internal(anyhow::Error),
    /// 501 Not Implemented — endpoint is an explicit stub.
    NotImplemented(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({"error": msg}))
            },
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({"error": "Invalid or missing bearer token"}),
            ),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({"error": msg})),
            Self::NoRegionData => (
                StatusCode::NOT_FOUND,
                serde_json::json!({"message": "No birds found for the selected region"}),
            ),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                let message = if env_flag("POCKETGUIDE_DEBUG_ERRORS") {
                    err.to_string()
                } else {
                    "internal server error".to_owned()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({"error": "Internal server error", "message": message}),
                )
            },
            Self::NotImplemented(msg) => (
                StatusCode::NOT_IMPLEMENTED,
                serde_json::json!({"error": "Not implemented", "message": msg}),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NoRegionData => Self::NoRegionData,
            ServiceError::Storage(StorageError::NotFound { entity: "species", .. }) => {
                Self::NotFound("Species not found".to_owned())
            },
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Storage(e) => Self::Internal(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::NoRegionData, StatusCode::NOT_FOUND),
            (ApiError::Internal(anyhow::anyhow!("boom")), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::NotImplemented("x".into()), StatusCode::NOT_IMPLEMENTED),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn no_region_data_maps_from_service_error() {
        let err: ApiError = ServiceError::NoRegionData.into();
        assert!(matches!(err, ApiError::NoRegionData));
    }

    #[test]
    fn unknown_species_maps_to_not_found() {
        let err: ApiError = ServiceError::Storage(StorageError::NotFound {
            entity: "species",
            id: "Dodo".to_owned(),
        })
        .into();
        assert!(matches!(err, ApiError::NotFound(msg) if msg == "Species not found"));
    }
}
