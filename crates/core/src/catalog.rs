use serde::{Deserialize, Serialize};

/// A catalogued bird taxon, keyed by its globally unique English name.
///
/// The English name is the join key for every related entity (illustrations,
/// localized names, frequency records).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Species {
    pub english_name: String,
    pub scientific_name: String,
    /// Category label used for grouping ("type" in the wire format)
    #[serde(rename = "type")]
    pub category: String,
    /// Taxonomic group
    pub taxa: String,
    /// Size descriptor (e.g. "small", "medium")
    pub size: Option<String>,
}

/// An illustration belonging to exactly one species.
///
/// At most the illustrations flagged `is_default` participate in the grouped
/// summary view; the store does not enforce one default per species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Illustration {
    pub id: i64,
    pub image_name: String,
    pub image_link: String,
    pub species_english_name: String,
    pub sex: Option<String>,
    pub breeding_status: Option<String>,
    pub subspecies: Option<String>,
    pub is_default: bool,
}

/// A localized name for a species, one per language row.
///
/// A species may carry zero, one, or many of these; language uniqueness per
/// species is not enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedName {
    pub language: String,
    pub name: String,
}

/// Regional observation frequency for a species.
///
/// `district` may hold the statewide-aggregate sentinel instead of a real
/// district name. Lower `frequency_rank` means more common.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyRecord {
    pub state: String,
    pub district: Option<String>,
    pub frequency_rank: i64,
    pub observation_count: Option<i64>,
    pub seasonality: Option<String>,
}
