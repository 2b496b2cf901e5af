//! The region query engine: joined, filtered, rank-ordered birds grouped by
//! category and enriched with localized name maps.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use pocketguide_core::{BirdRecord, ENGLISH_LANGUAGE, FALLBACK_CATEGORY, GroupedBirds, Locations};
use pocketguide_storage::{RegionBirdRow, Storage};

use crate::ServiceError;

pub struct RegionService {
    storage: Arc<Storage>,
}

impl RegionService {
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Produce the category → rank-ordered bird list mapping for a region.
    ///
    /// `state` is required and must be non-empty. `district` follows the
    /// statewide-sentinel rule (see `Storage::get_region_birds`). Localized
    /// names are fetched in one batched query over the distinct species in
    /// the result set rather than per row.
    ///
    /// # Errors
    /// - `InvalidInput` when `state` is empty.
    /// - `NoRegionData` when no frequency rows survive the filter.
    /// - `Storage` on any store failure.
    pub fn grouped_birds(
        &self,
        state: &str,
        district: Option<&str>,
    ) -> Result<GroupedBirds, ServiceError> {
        if state.trim().is_empty() {
            return Err(ServiceError::InvalidInput("State parameter is required".to_owned()));
        }

        let rows = self.storage.get_region_birds(state, district)?;
        if rows.is_empty() {
            tracing::warn!(state, ?district, "no birds found for region");
            return Err(ServiceError::NoRegionData);
        }

        let names_by_species = self.storage.get_names_for_species(&distinct_species(&rows))?;

        let mut grouped: GroupedBirds = BTreeMap::new();
        for row in rows {
            // seed the map with the English identifier, then overlay stored
            // rows in insert order; a stored "English" row wins (last write
            // wins, pinned by tests)
            let mut names = BTreeMap::new();
            names.insert(ENGLISH_LANGUAGE.to_owned(), row.english_name.clone());
            if let Some(localized) = names_by_species.get(&row.english_name) {
                for entry in localized {
                    names.insert(entry.language.clone(), entry.name.clone());
                }
            }

            let category = row
                .category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_owned());

            grouped.entry(category.clone()).or_default().push(BirdRecord {
                english_name: row.english_name,
                scientific_name: row.scientific_name,
                category,
                taxa: row.taxa,
                size: row.size,
                frequency_rank: row.frequency_rank,
                observation_count: row.observation_count,
                seasonality: row.seasonality,
                image_link: row.image_link,
                image_name: row.image_name,
                sex: row.sex,
                breeding_status: row.breeding_status,
                subspecies: row.subspecies,
                names,
            });
        }

        tracing::info!(categories = grouped.len(), "grouped region birds assembled");
        Ok(grouped)
    }

    /// Distinct states and their recorded districts, for the region picker.
    ///
    /// # Errors
    /// Returns `Storage` on any store failure.
    pub fn locations(&self) -> Result<Locations, ServiceError> {
        Ok(self.storage.get_locations()?)
    }
}

/// Distinct species names preserving first-seen order.
fn distinct_species(rows: &[RegionBirdRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.english_name.clone()))
        .map(|row| row.english_name.clone())
        .collect()
}
