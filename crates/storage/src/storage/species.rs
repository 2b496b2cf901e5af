//! Species attribute and related-record queries for the admin reports.

use std::collections::HashMap;

use pocketguide_core::{FrequencyRecord, IllustrationDetail, IllustrationSummary, Species};
use rusqlite::params;

use super::{MAX_IN_PARAMS, Storage, get_conn, in_placeholders, log_row_error};
use crate::StorageError;

fn map_species(row: &rusqlite::Row<'_>) -> rusqlite::Result<Species> {
    Ok(Species {
        english_name: row.get(0)?,
        scientific_name: row.get(1)?,
        category: row.get(2)?,
        taxa: row.get(3)?,
        size: row.get(4)?,
    })
}

impl Storage {
    /// All species, ordered by English name for stable listings.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn list_species(&self) -> Result<Vec<Species>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT english_name, scientific_name, type, taxa, size
             FROM species ORDER BY english_name",
        )?;
        let results = stmt.query_map([], map_species)?.filter_map(log_row_error).collect();
        Ok(results)
    }

    /// One species by its unique English name.
    ///
    /// # Errors
    /// Returns `NotFound` if the name is unknown.
    pub fn get_species(&self, english_name: &str) -> Result<Species, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT english_name, scientific_name, type, taxa, size
             FROM species WHERE english_name = ?1",
        )?;
        let mut rows = stmt.query(params![english_name])?;
        match rows.next()? {
            Some(row) => Ok(map_species(row)?),
            None => Err(StorageError::NotFound {
                entity: "species",
                id: english_name.to_owned(),
            }),
        }
    }

    /// Compact illustrations for a set of species in one batched query,
    /// keyed by species.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_illustrations_for_species(
        &self,
        species: &[String],
    ) -> Result<HashMap<String, Vec<IllustrationSummary>>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut by_species: HashMap<String, Vec<IllustrationSummary>> = HashMap::new();

        for chunk in species.chunks(MAX_IN_PARAMS) {
            let sql = format!(
                "SELECT species_english_name, id, image_name, image_link, is_default
                 FROM illustrations
                 WHERE species_english_name IN ({})
                 ORDER BY id",
                in_placeholders(chunk.len())
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(rusqlite::params_from_iter(chunk.iter()), |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    IllustrationSummary {
                        id: row.get(1)?,
                        image_name: row.get(2)?,
                        image_link: row.get(3)?,
                        is_default: row.get(4)?,
                    },
                ))
            })?;
            for (species_name, illustration) in rows.filter_map(log_row_error) {
                by_species.entry(species_name).or_default().push(illustration);
            }
        }

        Ok(by_species)
    }

    /// Full illustration history for one species.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_illustration_details(
        &self,
        english_name: &str,
    ) -> Result<Vec<IllustrationDetail>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, image_name, image_link, sex, breeding_status, subspecies, is_default
             FROM illustrations WHERE species_english_name = ?1 ORDER BY id",
        )?;
        let results = stmt
            .query_map(params![english_name], |row| {
                Ok(IllustrationDetail {
                    id: row.get(0)?,
                    image_name: row.get(1)?,
                    image_link: row.get(2)?,
                    sex: row.get(3)?,
                    breeding_status: row.get(4)?,
                    subspecies: row.get(5)?,
                    is_default: row.get(6)?,
                })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }

    /// Full frequency history for one species across all regions.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_frequency_for_species(
        &self,
        english_name: &str,
    ) -> Result<Vec<FrequencyRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT state, district, frequency_rank, observation_count, seasonality
             FROM frequency WHERE english_name = ?1 ORDER BY state, district, frequency_rank",
        )?;
        let results = stmt
            .query_map(params![english_name], |row| {
                Ok(FrequencyRecord {
                    state: row.get(0)?,
                    district: row.get(1)?,
                    frequency_rank: row.get(2)?,
                    observation_count: row.get(3)?,
                    seasonality: row.get(4)?,
                })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(results)
    }
}
