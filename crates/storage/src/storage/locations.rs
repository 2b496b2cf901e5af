//! Distinct state/district lookup for the region picker.

use std::collections::BTreeMap;

use pocketguide_core::Locations;

use super::{Storage, get_conn, log_row_error};
use crate::StorageError;

impl Storage {
    /// Distinct states and, per state, the distinct district values recorded
    /// for it. One query, folded in memory. Rows with a NULL district are
    /// skipped — they cannot be selected as a filter value.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_locations(&self) -> Result<Locations, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT state, district FROM frequency ORDER BY state, district",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
        })?;

        let mut states: Vec<String> = Vec::new();
        let mut districts: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (state, district) in rows.filter_map(log_row_error) {
            if states.last() != Some(&state) {
                states.push(state.clone());
            }
            let entry = districts.entry(state).or_default();
            if let Some(d) = district {
                entry.push(d);
            }
        }

        Ok(Locations { states, districts })
    }
}
