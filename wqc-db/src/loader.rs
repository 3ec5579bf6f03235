//! CSV data loading for populating the observation tables.
//!
//! # CSV Format
//!
//! Headered, matched by column name:
//! `x,y,month,cluster,monitoring_loc_id,analyte_primary_name`
//!
//! Exports from dataframe tools often write integer columns that contain
//! nulls as floats (`3.0`), so `month` and `cluster` accept whole-number
//! floats as well.

use crate::Database;
use rusqlite::params;
use serde::Deserialize;
use wqc_types::{ClusterLabel, ClusteringMethod};

/// One raw CSV record. Every field is read as text and validated by hand;
/// a bad value skips its row, never the whole load.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    x: String,
    #[serde(default)]
    y: String,
    #[serde(default)]
    month: String,
    #[serde(default)]
    cluster: String,
    #[serde(default)]
    monitoring_loc_id: String,
    #[serde(default)]
    analyte_primary_name: String,
}

/// Parse an integer that may have been written as a whole float ("3.0").
fn parse_whole(s: &str) -> Option<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_coordinate(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Database {
    /// Load observations for one clustering method from a CSV string.
    ///
    /// Rows are appended to the method's table in file order. Rows with a
    /// missing or non-numeric coordinate, or a month outside 1-12, are
    /// skipped. An empty or non-integer cluster is stored as NULL.
    ///
    /// Returns the number of rows inserted.
    ///
    /// # Example CSV
    /// ```text
    /// x,y,month,cluster,monitoring_loc_id,analyte_primary_name
    /// -121.50,38.58,3,1,SAC-001,Nitrate
    /// -121.50,38.58,4,,SAC-001,Arsenic
    /// ```
    pub fn load_observations(
        &self,
        method: ClusteringMethod,
        csv_data: &str,
    ) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut skipped = 0usize;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} (x, y, month, cluster, monitoring_loc_id, analyte_primary_name)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                method.source_id()
            ))?;

            for result in rdr.deserialize::<CsvRow>() {
                let r = result?;

                let (x, y) = match (parse_coordinate(&r.x), parse_coordinate(&r.y)) {
                    (Some(x), Some(y)) => (x, y),
                    _ => {
                        skipped += 1;
                        continue;
                    }
                };

                let month = match parse_whole(&r.month) {
                    Some(m) if (1..=12).contains(&m) => m,
                    _ => {
                        skipped += 1;
                        continue;
                    }
                };

                let cluster: Option<ClusterLabel> = parse_whole(&r.cluster);

                stmt.execute(params![
                    x,
                    y,
                    month,
                    cluster,
                    r.monitoring_loc_id,
                    r.analyte_primary_name
                ])?;
                count += 1;
            }
        }
        tx.commit()?;

        if skipped > 0 {
            log::warn!(
                "[WQC] loader: skipped {} invalid rows for {}",
                skipped,
                method.source_id()
            );
        }
        log::info!(
            "[WQC] loader: loaded {} observations into {}",
            count,
            method.source_id()
        );
        Ok(count)
    }
}
