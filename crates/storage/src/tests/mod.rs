//! Test utilities and module declarations for storage tests.

use rusqlite::params;
use tempfile::TempDir;

use crate::Storage;

mod locations_tests;
mod seed_tests;
mod species_tests;
mod stats_tests;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_species(storage: &Storage, english_name: &str, category: &str) {
    let conn = storage.pool.get().unwrap();
    conn.execute(
        "INSERT INTO species (english_name, scientific_name, type, taxa, size)
         VALUES (?1, ?2, ?3, 'birds', 'small')",
        params![english_name, format!("Scientificus {english_name}"), category],
    )
    .unwrap();
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_frequency(
    storage: &Storage,
    english_name: &str,
    state: &str,
    district: &str,
    rank: i64,
) {
    let conn = storage.pool.get().unwrap();
    conn.execute(
        "INSERT INTO frequency
         (english_name, state, district, frequency_rank, observation_count, seasonality)
         VALUES (?1, ?2, ?3, ?4, 10, 'Year-round')",
        params![english_name, state, district, rank],
    )
    .unwrap();
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_illustration(storage: &Storage, english_name: &str, is_default: bool) {
    let conn = storage.pool.get().unwrap();
    conn.execute(
        "INSERT INTO illustrations
         (species_english_name, image_name, image_link, is_default)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            english_name,
            format!("{english_name}.jpg"),
            format!("https://img.example/{english_name}.jpg"),
            is_default
        ],
    )
    .unwrap();
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_name(storage: &Storage, english_name: &str, language: &str, name: &str) {
    let conn = storage.pool.get().unwrap();
    conn.execute(
        "INSERT INTO names (species_english_name, language, name) VALUES (?1, ?2, ?3)",
        params![english_name, language, name],
    )
    .unwrap();
}
