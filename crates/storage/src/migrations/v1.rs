//! Migration v1: catalog schema
//!
//! Four reference tables, all keyed off species.english_name. Populated by
//! bulk ingestion (or the sample seeder), read-only afterwards.

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS species (
    english_name TEXT PRIMARY KEY,
    scientific_name TEXT NOT NULL,
    type TEXT NOT NULL,
    taxa TEXT NOT NULL,
    size TEXT
);

CREATE TABLE IF NOT EXISTS illustrations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    image_name TEXT NOT NULL,
    image_link TEXT NOT NULL,
    species_english_name TEXT REFERENCES species(english_name),
    sex TEXT,
    breeding_status TEXT,
    subspecies TEXT,
    is_default INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    species_english_name TEXT REFERENCES species(english_name),
    language TEXT NOT NULL,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS frequency (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    english_name TEXT REFERENCES species(english_name),
    state TEXT NOT NULL,
    district TEXT,
    frequency_rank INTEGER NOT NULL,
    observation_count INTEGER,
    seasonality TEXT
);
";
