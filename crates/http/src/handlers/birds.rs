//! Public catalog endpoints: the grouped region view and the region picker.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use pocketguide_core::{GroupedBirds, Locations};

use crate::blocking::blocking_json;
use crate::query_types::GroupedBirdsQuery;
use crate::{ApiError, AppState};

/// `GET /birds/grouped?state=<S>[&district=<D>]`
pub async fn grouped_birds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GroupedBirdsQuery>,
) -> Result<Json<GroupedBirds>, ApiError> {
    tracing::info!(state = ?query.state, district = ?query.district, "grouped birds request");
    let service = Arc::clone(&state.region_service);
    blocking_json(move || {
        service.grouped_birds(
            query.state.as_deref().unwrap_or_default(),
            query.district.as_deref(),
        )
    })
    .await
}

/// `GET /birds/locations`
pub async fn locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Locations>, ApiError> {
    let service = Arc::clone(&state.region_service);
    blocking_json(move || service.locations()).await
}
