use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One bird row in the grouped region view.
///
/// Field names are the wire format consumed by the guide frontend and must
/// stay stable: `english_name, scientific_name, type, taxa, size,
/// frequency_rank, observation_count, seasonality, image_link, image_name,
/// sex, breeding_status, subspecies, names`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirdRecord {
    pub english_name: String,
    pub scientific_name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub taxa: String,
    pub size: Option<String>,
    pub frequency_rank: i64,
    pub observation_count: Option<i64>,
    pub seasonality: Option<String>,
    /// Image fields come from the default illustration; null when the
    /// species has none (left join).
    pub image_link: Option<String>,
    pub image_name: Option<String>,
    pub sex: Option<String>,
    pub breeding_status: Option<String>,
    pub subspecies: Option<String>,
    /// Localized names keyed by language, always containing "English".
    pub names: BTreeMap<String, String>,
}

/// Category label mapped to its rank-ordered bird list.
///
/// `BTreeMap` keeps category iteration order stable so identical queries
/// against an unchanged store serialize byte-identically.
pub type GroupedBirds = BTreeMap<String, Vec<BirdRecord>>;

/// Available states and the districts recorded under each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locations {
    pub states: Vec<String>,
    pub districts: BTreeMap<String, Vec<String>>,
}
