//! Admin reporting: species listings, per-species detail, store statistics,
//! and the sample-data seeder. Every operation is a single stateless read
//! (the seeder excepted).

use std::sync::Arc;

use pocketguide_core::{
    Coverage, CoverageEntry, Distribution, EntityCounts, SpeciesDetail, SpeciesRecord, Statistics,
};
use pocketguide_storage::{SeedReport, Storage};

use crate::ServiceError;

pub struct AdminService {
    storage: Arc<Storage>,
}

impl AdminService {
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Every species with its illustrations and localized names attached.
    ///
    /// Related rows come from two batched queries over the full species
    /// list instead of two queries per species.
    ///
    /// # Errors
    /// Returns `Storage` on any store failure.
    pub fn list_species(&self) -> Result<Vec<SpeciesRecord>, ServiceError> {
        let species = self.storage.list_species()?;
        let keys: Vec<String> = species.iter().map(|s| s.english_name.clone()).collect();

        let mut illustrations = self.storage.get_illustrations_for_species(&keys)?;
        let mut names = self.storage.get_names_for_species(&keys)?;

        let records = species
            .into_iter()
            .map(|s| SpeciesRecord {
                illustrations: illustrations.remove(&s.english_name).unwrap_or_default(),
                names: names.remove(&s.english_name).unwrap_or_default(),
                english_name: s.english_name,
                scientific_name: s.scientific_name,
                category: s.category,
                taxa: s.taxa,
                size: s.size,
            })
            .collect();

        Ok(records)
    }

    /// Full detail for one species: attributes plus illustration, name,
    /// and frequency histories.
    ///
    /// # Errors
    /// Returns `Storage(NotFound)` for an unknown name.
    pub fn species_detail(&self, english_name: &str) -> Result<SpeciesDetail, ServiceError> {
        let species = self.storage.get_species(english_name)?;
        let illustrations = self.storage.get_illustration_details(english_name)?;
        let mut names = self.storage.get_names_for_species(&[english_name.to_owned()])?;
        let frequency = self.storage.get_frequency_for_species(english_name)?;

        Ok(SpeciesDetail {
            english_name: species.english_name,
            scientific_name: species.scientific_name,
            category: species.category,
            taxa: species.taxa,
            size: species.size,
            illustrations,
            names: names.remove(english_name).unwrap_or_default(),
            frequency,
        })
    }

    /// Entity counts, per-category distribution, and coverage ratios.
    ///
    /// # Errors
    /// Returns `Storage` on any store failure.
    pub fn statistics(&self) -> Result<Statistics, ServiceError> {
        let raw = self.storage.get_statistics()?;

        Ok(Statistics {
            counts: EntityCounts {
                species: raw.species_count,
                illustrations: raw.illustrations_count,
                names: raw.names_count,
                frequency: raw.frequency_count,
            },
            distribution: Distribution { species_by_type: raw.species_by_type },
            coverage: Coverage {
                illustrations: CoverageEntry::new(
                    raw.species_with_illustrations,
                    raw.species_count,
                ),
                names: CoverageEntry::new(raw.species_with_names, raw.species_count),
            },
        })
    }

    /// Seed the sample catalog; no-op on a populated store.
    ///
    /// # Errors
    /// Returns `Storage` on any store failure.
    pub fn seed(&self) -> Result<SeedReport, ServiceError> {
        Ok(self.storage.seed_sample_data()?)
    }
}
