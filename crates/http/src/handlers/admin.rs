//! Admin inspection endpoints over the catalog store.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use pocketguide_core::{SpeciesDetail, SpeciesRecord, Statistics};
use pocketguide_storage::SeedReport;

use crate::blocking::blocking_json;
use crate::{ApiError, AppState};

/// `GET /admin/species`
pub async fn list_species(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SpeciesRecord>>, ApiError> {
    let service = Arc::clone(&state.admin_service);
    blocking_json(move || service.list_species()).await
}

/// `GET /admin/species/{name}`
pub async fn species_detail(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<SpeciesDetail>, ApiError> {
    let service = Arc::clone(&state.admin_service);
    blocking_json(move || service.species_detail(&name)).await
}

/// `GET /admin/statistics`
pub async fn statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Statistics>, ApiError> {
    let service = Arc::clone(&state.admin_service);
    blocking_json(move || service.statistics()).await
}

/// `POST /admin/seed` — sample catalog data for local development.
pub async fn seed(State(state): State<Arc<AppState>>) -> Result<Json<SeedReport>, ApiError> {
    let service = Arc::clone(&state.admin_service);
    blocking_json(move || service.seed()).await
}

/// `POST /admin/upload-csv` — explicit stub so the route exists rather than
/// silently 404ing; ingestion runs out of process.
pub async fn upload_csv() -> ApiError {
    ApiError::NotImplemented("CSV upload functionality is not yet implemented".to_owned())
}
