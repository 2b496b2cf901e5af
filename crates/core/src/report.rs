//! Response shapes for the admin reporting endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FrequencyRecord, LocalizedName};

/// Compact illustration shape used in the species listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IllustrationSummary {
    pub id: i64,
    pub image_name: String,
    pub image_link: String,
    pub is_default: bool,
}

/// Full illustration shape used in the species detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IllustrationDetail {
    pub id: i64,
    pub image_name: String,
    pub image_link: String,
    pub sex: Option<String>,
    pub breeding_status: Option<String>,
    pub subspecies: Option<String>,
    pub is_default: bool,
}

/// One entry of the `/admin/species` listing: a species with its
/// illustrations and localized names attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub english_name: String,
    pub scientific_name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub taxa: String,
    pub size: Option<String>,
    pub illustrations: Vec<IllustrationSummary>,
    pub names: Vec<LocalizedName>,
}

/// Full species detail: attributes plus illustration, name, and frequency
/// histories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDetail {
    pub english_name: String,
    pub scientific_name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub taxa: String,
    pub size: Option<String>,
    pub illustrations: Vec<IllustrationDetail>,
    pub names: Vec<LocalizedName>,
    pub frequency: Vec<FrequencyRecord>,
}

/// Total row counts per entity table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityCounts {
    pub species: u64,
    pub illustrations: u64,
    pub names: u64,
    pub frequency: u64,
}

/// Species counts grouped by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub species_by_type: BTreeMap<String, u64>,
}

/// Share of species possessing at least one related record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoverageEntry {
    pub count: u64,
    pub percentage: f64,
}

impl CoverageEntry {
    /// Percentage is `(count / total) * 100` rounded to one decimal place,
    /// defined as `0` when `total` is zero.
    #[must_use]
    pub fn new(count: u64, total: u64) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64 * 1000.0).round() / 10.0
        };
        Self { count, percentage }
    }
}

/// Coverage ratios for illustrations and localized names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coverage {
    pub illustrations: CoverageEntry,
    pub names: CoverageEntry,
}

/// The `/admin/statistics` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub counts: EntityCounts,
    pub distribution: Distribution,
    pub coverage: Coverage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_rounds_to_one_decimal() {
        let entry = CoverageEntry::new(1, 3);
        assert!((entry.percentage - 33.3).abs() < f64::EPSILON);

        let entry = CoverageEntry::new(2, 3);
        assert!((entry.percentage - 66.7).abs() < f64::EPSILON);

        let entry = CoverageEntry::new(5, 10);
        assert!((entry.percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coverage_zero_total_avoids_division() {
        let entry = CoverageEntry::new(0, 0);
        assert_eq!(entry.count, 0);
        assert!((entry.percentage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn species_record_uses_type_field_name() {
        let record = SpeciesRecord {
            english_name: "Black Drongo".to_owned(),
            scientific_name: "Dicrurus macrocercus".to_owned(),
            category: "bird".to_owned(),
            taxa: "birds".to_owned(),
            size: None,
            illustrations: vec![],
            names: vec![],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "bird");
    }
}
