//! Bearer-token check for the admin routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{ApiError, AppState};

/// Rejects admin requests without the configured bearer token.
///
/// When no token is configured the check is skipped entirely (local
/// development mode).
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.config.admin_token.as_deref() {
        let presented = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if presented != Some(expected) {
            tracing::warn!(path = %req.uri().path(), "admin request rejected");
            return Err(ApiError::Unauthorized);
        }
    }
    Ok(next.run(req).await)
}
