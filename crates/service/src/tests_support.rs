//! Shared fixtures for service tests: a temp-file store plus a raw
//! connection for inserting reference rows.

#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use pocketguide_storage::Storage;
use rusqlite::{Connection, params};
use tempfile::TempDir;

pub struct TestDb {
    storage: Arc<Storage>,
    conn: Connection,
    _temp_dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let storage = Arc::new(Storage::new(&db_path).unwrap());
        let conn = Connection::open(&db_path).unwrap();
        Self { storage, conn, _temp_dir: temp_dir }
    }

    pub fn storage(&self) -> Arc<Storage> {
        Arc::clone(&self.storage)
    }

    pub fn seed(&self) {
        self.storage.seed_sample_data().unwrap();
    }
}

pub fn insert_species(db: &TestDb, english_name: &str, category: &str) {
    db.conn
        .execute(
            "INSERT INTO species (english_name, scientific_name, type, taxa, size)
             VALUES (?1, ?2, ?3, 'birds', 'small')",
            params![english_name, format!("Scientificus {english_name}"), category],
        )
        .unwrap();
}

pub fn insert_frequency(db: &TestDb, english_name: &str, state: &str, district: &str, rank: i64) {
    db.conn
        .execute(
            "INSERT INTO frequency
             (english_name, state, district, frequency_rank, observation_count, seasonality)
             VALUES (?1, ?2, ?3, ?4, 10, 'Year-round')",
            params![english_name, state, district, rank],
        )
        .unwrap();
}

pub fn insert_illustration(db: &TestDb, english_name: &str, is_default: bool) {
    db.conn
        .execute(
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

pub fn insert_name(db: &TestDb, english_name: &str, language: &str, name: &str) {
    db.conn
        .execute(
            "INSERT INTO names (species_english_name, language, name) VALUES (?1, ?2, ?3)",
            params![english_name, language, name],
        )
        .unwrap();
}
