//! HTTP API server for the pocket guide catalog.

pub mod api_error;
mod auth;
mod blocking;
mod handlers;
mod query_types;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use pocketguide_service::{AdminService, RegionService};

pub use api_error::ApiError;

/// Server-level configuration read once at startup.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Bearer token required on `/admin/*` routes. `None` disables the
    /// check (local development).
    pub admin_token: Option<String>,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            admin_token: std::env::var("POCKETGUIDE_ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }
}

/// Shared application state for all HTTP handlers.
///
/// Services are injected per instance; there is no process-wide store
/// handle. Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Region query engine (grouped birds, locations)
    pub region_service: Arc<RegionService>,
    /// Admin reporting operations
    pub admin_service: Arc<AdminService>,
    /// Startup configuration
    pub config: ServerConfig,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let admin_routes = Router::new()
        .route("/admin/species", get(handlers::admin::list_species))
        .route("/admin/species/{name}", get(handlers::admin::species_detail))
        .route("/admin/statistics", get(handlers::admin::statistics))
        .route("/admin/upload-csv", post(handlers::admin::upload_csv))
        .route("/admin/seed", post(handlers::admin::seed))
        .route_layer(middleware::from_fn_with_state(Arc::clone(&state), auth::require_admin));

    Router::new()
        .route("/health", get(health))
        .route("/birds/grouped", get(handlers::birds::grouped_birds))
        .route("/birds/locations", get(handlers::birds::locations))
        .merge(admin_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
