//! Sample catalog data for local development and testing.
//!
//! The real catalog is populated by an external bulk-ingestion process;
//! this seeder exists so a fresh checkout can exercise the API end to end.

use rusqlite::params;
use serde::Serialize;

use super::{Storage, get_conn};
use crate::StorageError;

/// Outcome of a seed attempt. Seeding a populated store is a no-op.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeedReport {
    pub already_populated: bool,
    pub species: u64,
    pub frequency_records: u64,
    pub illustrations: u64,
}

// (english_name, scientific_name, type, taxa, size)
const SAMPLE_SPECIES: &[(&str, &str, &str, &str, &str)] = &[
    ("Asian Paradise Flycatcher", "Terpsiphone paradisi", "bird", "birds", "medium"),
    ("White-throated Kingfisher", "Halcyon smyrnensis", "bird", "birds", "medium"),
    ("Red-vented Bulbul", "Pycnonotus cafer", "bird", "birds", "small"),
    ("House Sparrow", "Passer domesticus", "bird", "birds", "small"),
    ("Indian Robin", "Copsychus fulicatus", "bird", "birds", "small"),
    ("Common Myna", "Acridotheres tristis", "bird", "birds", "medium"),
    ("Rose-ringed Parakeet", "Psittacula krameri", "bird", "birds", "medium"),
    ("Black Drongo", "Dicrurus macrocercus", "bird", "birds", "small"),
    ("Pied Kingfisher", "Ceryle rudis", "bird", "birds", "medium"),
    ("Brown-headed Barbet", "Psilopogon zeylanicus", "bird", "birds", "small"),
];

// (english_name, state, district, frequency_rank, observation_count, seasonality)
const SAMPLE_FREQUENCY: &[(&str, &str, &str, i64, i64, &str)] = &[
    ("House Sparrow", "Mizoram", "Aizawl", 1, 150, "Year-round"),
    ("Red-vented Bulbul", "Mizoram", "Aizawl", 3, 120, "Year-round"),
    ("Black Drongo", "Mizoram", "Aizawl", 7, 85, "Year-round"),
    ("White-throated Kingfisher", "Mizoram", "Aizawl", 8, 78, "Mar-Oct"),
    ("Common Myna", "Mizoram", "Aizawl", 5, 95, "Year-round"),
    ("Rose-ringed Parakeet", "Mizoram", "Aizawl", 10, 65, "Year-round"),
    ("Indian Robin", "Mizoram", "Aizawl", 12, 55, "Nov-Feb"),
    ("Asian Paradise Flycatcher", "Mizoram", "Aizawl", 15, 42, "Apr-Sep"),
    ("Pied Kingfisher", "Mizoram", "Aizawl", 18, 35, "Nov-Mar"),
    ("Brown-headed Barbet", "Mizoram", "Aizawl", 22, 28, "Year-round"),
    ("House Sparrow", "Mizoram", "Lunglei", 2, 135, "Year-round"),
    ("Red-vented Bulbul", "Mizoram", "Lunglei", 4, 110, "Year-round"),
    ("Common Myna", "Mizoram", "Lunglei", 6, 88, "Year-round"),
    ("Black Drongo", "Mizoram", "Lunglei", 9, 72, "Year-round"),
    ("White-throated Kingfisher", "Mizoram", "Lunglei", 11, 62, "Mar-Oct"),
];

// (english_name, image_link, image_name)
const SAMPLE_ILLUSTRATIONS: &[(&str, &str, &str)] = &[
    (
        "House Sparrow",
        "https://images.unsplash.com/photo-1552728089-57bdde30beb3?w=400&h=300&fit=crop",
        "house_sparrow.jpg",
    ),
    (
        "Red-vented Bulbul",
        "https://images.unsplash.com/photo-1549366021-9f761d040a94?w=400&h=300&fit=crop",
        "red_vented_bulbul.jpg",
    ),
    (
        "Black Drongo",
        "https://images.unsplash.com/photo-1444927714506-8492d94b5ba0?w=400&h=300&fit=crop",
        "black_drongo.jpg",
    ),
    (
        "White-throated Kingfisher",
        "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=300&fit=crop",
        "white_throated_kingfisher.jpg",
    ),
    (
        "Common Myna",
        "https://images.unsplash.com/photo-1565002330297-58754c040ddc?w=400&h=300&fit=crop",
        "common_myna.jpg",
    ),
];

impl Storage {
    /// Seed the sample catalog, skipping stores that already hold data.
    ///
    /// # Errors
    /// Returns error if any insert fails; the transaction rolls back.
    pub fn seed_sample_data(&self) -> Result<SeedReport, StorageError> {
        let mut conn = get_conn(&self.pool)?;

        let existing: i64 =
            conn.query_row("SELECT COUNT(*) FROM species", [], |row| row.get(0))?;
        if existing > 0 {
            tracing::info!(species = existing, "store already populated, skipping seed");
            return Ok(SeedReport {
                already_populated: true,
                species: existing as u64,
                frequency_records: 0,
                illustrations: 0,
            });
        }

        let tx = conn.transaction().map_err(StorageError::Database)?;

        for (english_name, scientific_name, category, taxa, size) in SAMPLE_SPECIES {
            tx.execute(
                "INSERT INTO species (english_name, scientific_name, type, taxa, size)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![english_name, scientific_name, category, taxa, size],
            )?;
        }

        for (english_name, state, district, rank, count, seasonality) in SAMPLE_FREQUENCY {
            tx.execute(
                "INSERT INTO frequency
                 (english_name, state, district, frequency_rank, observation_count, seasonality)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![english_name, state, district, rank, count, seasonality],
            )?;
        }

        for (english_name, image_link, image_name) in SAMPLE_ILLUSTRATIONS {
            tx.execute(
                "INSERT INTO illustrations
                 (species_english_name, image_link, image_name, is_default, sex, breeding_status)
                 VALUES (?1, ?2, ?3, 1, 'unknown', 'unknown')",
                params![english_name, image_link, image_name],
            )?;
        }

        tx.commit().map_err(StorageError::Database)?;

        tracing::info!(
            species = SAMPLE_SPECIES.len(),
            frequency = SAMPLE_FREQUENCY.len(),
            illustrations = SAMPLE_ILLUSTRATIONS.len(),
            "sample catalog seeded"
        );

        Ok(SeedReport {
            already_populated: false,
            species: SAMPLE_SPECIES.len() as u64,
            frequency_records: SAMPLE_FREQUENCY.len() as u64,
            illustrations: SAMPLE_ILLUSTRATIONS.len() as u64,
        })
    }
}
