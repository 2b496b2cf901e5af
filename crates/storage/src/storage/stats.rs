//! Aggregation queries backing the statistics report.

use std::collections::BTreeMap;

use super::{Storage, get_conn, log_row_error};
use crate::StorageError;

/// Raw aggregate numbers; percentage shaping happens in the service layer.
#[derive(Debug, Clone)]
pub struct RawStatistics {
    pub species_count: u64,
    pub illustrations_count: u64,
    pub names_count: u64,
    pub frequency_count: u64,
    pub species_by_type: BTreeMap<String, u64>,
    pub species_with_illustrations: u64,
    pub species_with_names: u64,
}

fn count_table(conn: &super::PooledConn, table: &str) -> Result<u64, StorageError> {
    // table names come from a fixed internal list, never from input
    let count: i64 =
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(count as u64)
}

impl Storage {
    /// Collect every aggregate the statistics report needs.
    ///
    /// # Errors
    /// Returns error if any aggregation query fails.
    pub fn get_statistics(&self) -> Result<RawStatistics, StorageError> {
        let conn = get_conn(&self.pool)?;

        let species_count = count_table(&conn, "species")?;
        let illustrations_count = count_table(&conn, "illustrations")?;
        let names_count = count_table(&conn, "names")?;
        let frequency_count = count_table(&conn, "frequency")?;

        let mut stmt =
            conn.prepare("SELECT type, COUNT(english_name) FROM species GROUP BY type")?;
        let species_by_type: BTreeMap<String, u64> = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64)))?
            .filter_map(log_row_error)
            .collect();

        let species_with_illustrations: i64 = conn.query_row(
            "SELECT COUNT(DISTINCT species_english_name) FROM illustrations",
            [],
            |row| row.get(0),
        )?;
        let species_with_names: i64 = conn.query_row(
            "SELECT COUNT(DISTINCT species_english_name) FROM names",
            [],
            |row| row.get(0),
        )?;

        Ok(RawStatistics {
            species_count,
            illustrations_count,
            names_count,
            frequency_count,
            species_by_type,
            species_with_illustrations: species_with_illustrations as u64,
            species_with_names: species_with_names as u64,
        })
    }
}
