//! Migration v2: lookup indexes for the region query and admin reports

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_frequency_state_district ON frequency(state, district);
CREATE INDEX IF NOT EXISTS idx_frequency_species ON frequency(english_name);
CREATE INDEX IF NOT EXISTS idx_illustrations_species ON illustrations(species_english_name, is_default);
CREATE INDEX IF NOT EXISTS idx_names_species ON names(species_english_name);
";
