//! The region join: frequency + species + default illustration.

use std::collections::HashMap;

use pocketguide_core::{LocalizedName, STATEWIDE_SENTINEL};
use rusqlite::params;

use super::{MAX_IN_PARAMS, Storage, get_conn, in_placeholders, log_row_error};
use crate::StorageError;

/// One joined row of the region query, ordered by frequency rank.
///
/// Image fields are null when the species has no default illustration
/// (left join). `category` is read as nullable so legacy rows without a
/// type still surface instead of failing the row map.
#[derive(Debug, Clone)]
pub struct RegionBirdRow {
    pub english_name: String,
    pub scientific_name: String,
    pub category: Option<String>,
    pub taxa: String,
    pub size: Option<String>,
    pub frequency_rank: i64,
    pub observation_count: Option<i64>,
    pub seasonality: Option<String>,
    pub image_link: Option<String>,
    pub image_name: Option<String>,
    pub sex: Option<String>,
    pub breeding_status: Option<String>,
    pub subspecies: Option<String>,
}

const REGION_SELECT: &str = "SELECT f.frequency_rank, f.observation_count, f.seasonality,
            s.english_name, s.scientific_name, s.type, s.taxa, s.size,
            i.image_link, i.image_name, i.sex, i.breeding_status, i.subspecies
     FROM frequency f
     JOIN species s ON f.english_name = s.english_name
     LEFT JOIN illustrations i
       ON s.english_name = i.species_english_name AND i.is_default = 1
     WHERE f.state = ?1";

fn map_region_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RegionBirdRow> {
    Ok(RegionBirdRow {
        frequency_rank: row.get(0)?,
        observation_count: row.get(1)?,
        seasonality: row.get(2)?,
        english_name: row.get(3)?,
        scientific_name: row.get(4)?,
        category: row.get(5)?,
        taxa: row.get(6)?,
        size: row.get(7)?,
        image_link: row.get(8)?,
        image_name: row.get(9)?,
        sex: row.get(10)?,
        breeding_status: row.get(11)?,
        subspecies: row.get(12)?,
    })
}

impl Storage {
    /// Fetch the joined, filtered, rank-ordered rows for a region.
    ///
    /// District rule: `None` or the `Statewide` sentinel selects rows whose
    /// district CONTAINS the sentinel word (statewide aggregates are stored
    /// as "Statewide" or variants); any other value is an exact match.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_region_birds(
        &self,
        state: &str,
        district: Option<&str>,
    ) -> Result<Vec<RegionBirdRow>, StorageError> {
        let conn = get_conn(&self.pool)?;

        let results = match district {
            Some(d) if d != STATEWIDE_SENTINEL => {
                tracing::info!(state, district = d, "region query: exact district match");
                let sql = format!("{REGION_SELECT} AND f.district = ?2 ORDER BY f.frequency_rank");
                let mut stmt = conn.prepare(&sql)?;
                stmt.query_map(params![state, d], map_region_row)?
                    .filter_map(log_row_error)
                    .collect()
            },
            _ => {
                tracing::info!(state, "region query: statewide aggregate rows");
                let pattern = format!("%{STATEWIDE_SENTINEL}%");
                let sql =
                    format!("{REGION_SELECT} AND f.district LIKE ?2 ORDER BY f.frequency_rank");
                let mut stmt = conn.prepare(&sql)?;
                stmt.query_map(params![state, pattern], map_region_row)?
                    .filter_map(log_row_error)
                    .collect()
            },
        };

        Ok(results)
    }

    /// Fetch localized names for a set of species in one batched query,
    /// keyed by species. Rows come back in insert order (`id`) so callers
    /// folding them into a map get last-write-wins semantics.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_names_for_species(
        &self,
        species: &[String],
    ) -> Result<HashMap<String, Vec<LocalizedName>>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut by_species: HashMap<String, Vec<LocalizedName>> = HashMap::new();

        for chunk in species.chunks(MAX_IN_PARAMS) {
            let sql = format!(
                "SELECT species_english_name, language, name
                 FROM names
                 WHERE species_english_name IN ({})
                 ORDER BY id",
                in_placeholders(chunk.len())
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(rusqlite::params_from_iter(chunk.iter()), |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    LocalizedName { language: row.get(1)?, name: row.get(2)? },
                ))
            })?;
            for (species_name, localized) in rows.filter_map(log_row_error) {
                by_species.entry(species_name).or_default().push(localized);
            }
        }

        Ok(by_species)
    }
}
