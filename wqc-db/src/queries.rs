//! Typed queries over the observation tables.
//!
//! The dashboard only ever needs full-table reads; filtering happens in
//! memory on every render pass. The summary queries back the CLI's
//! `inspect` command.

use crate::models::ClusterCount;
use crate::Database;
use rusqlite::params;
use wqc_types::{ClusteringMethod, Observation, ObservationTable, TableSource, WqcError};

impl Database {
    /// Read every observation for a method, in insertion order.
    pub fn query_observations(&self, method: ClusteringMethod) -> anyhow::Result<ObservationTable> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT x, y, month, cluster, monitoring_loc_id, analyte_primary_name
             FROM {}
             ORDER BY rowid",
            method.source_id()
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Observation {
                    x: row.get(0)?,
                    y: row.get(1)?,
                    month: row.get(2)?,
                    cluster: row.get(3)?,
                    monitoring_loc_id: row.get(4)?,
                    analyte_primary_name: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[WQC] query: query_observations({}) returned {} records",
            method.source_id(),
            rows.len()
        );
        Ok(ObservationTable::new(rows))
    }

    /// Total number of observations stored for a method.
    pub fn count_observations(&self, method: ClusteringMethod) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", method.source_id()),
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Observation and location counts per cluster label, highest label first.
    ///
    /// Unlabelled rows are reported last with `cluster: None`.
    pub fn query_cluster_counts(&self, method: ClusteringMethod) -> anyhow::Result<Vec<ClusterCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT cluster, COUNT(*), COUNT(DISTINCT monitoring_loc_id)
             FROM {}
             GROUP BY cluster
             ORDER BY cluster IS NULL, cluster DESC",
            method.source_id()
        ))?;
        let rows = stmt
            .query_map(params![], |row| {
                Ok(ClusterCount {
                    cluster: row.get(0)?,
                    observations: row.get(1)?,
                    locations: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl TableSource for Database {
    fn read_table(&self, source_id: &str) -> wqc_types::Result<ObservationTable> {
        let method = ClusteringMethod::from_source_id(source_id)
            .ok_or_else(|| WqcError::data_unavailable(source_id, "unknown data source"))?;
        self.query_observations(method)
            .map_err(|e| WqcError::data_unavailable(source_id, e))
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use wqc_types::{ClusteringMethod, TableSource, WqcError};

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_observations(
            ClusteringMethod::KMeans,
            "\
x,y,month,cluster,monitoring_loc_id,analyte_primary_name
10,20,3,1,L1,Nitrate
10,20,3,1,L1,Arsenic
11,21,8,,L2,Lead
12,22,5,4,L3,Boron
12,22,6,4,L4,Boron
",
        )
        .unwrap();
        db
    }

    #[test]
    fn query_observations_preserves_insertion_order() {
        let db = sample_db();
        let table = db.query_observations(ClusteringMethod::KMeans).unwrap();
        assert_eq!(table.len(), 5);
        let analytes: Vec<&str> = table
            .rows()
            .iter()
            .map(|r| r.analyte_primary_name.as_str())
            .collect();
        assert_eq!(analytes, vec!["Nitrate", "Arsenic", "Lead", "Boron", "Boron"]);
        assert_eq!(table.rows()[2].cluster, None);
        assert_eq!(table.rows()[0].x, 10.0);
        assert_eq!(table.rows()[0].y, 20.0);
    }

    #[test]
    fn count_observations_per_method() {
        let db = sample_db();
        assert_eq!(db.count_observations(ClusteringMethod::KMeans).unwrap(), 5);
        assert_eq!(db.count_observations(ClusteringMethod::Spectral).unwrap(), 0);
    }

    #[test]
    fn cluster_counts_put_unlabelled_last() {
        let db = sample_db();
        let counts = db.query_cluster_counts(ClusteringMethod::KMeans).unwrap();
        let labels: Vec<Option<i64>> = counts.iter().map(|c| c.cluster).collect();
        assert_eq!(labels, vec![Some(4), Some(1), None]);
        assert_eq!(counts[0].observations, 2);
        assert_eq!(counts[0].locations, 2);
        assert_eq!(counts[1].locations, 1);
    }

    #[test]
    fn read_table_by_source_id() {
        let db = sample_db();
        let table = db.read_table("kmeans_observations").unwrap();
        assert_eq!(table.cluster_options(), vec![4, 1]);
    }

    #[test]
    fn unknown_source_is_data_unavailable() {
        let db = sample_db();
        let err = db.read_table("minha_tabela").unwrap_err();
        assert!(matches!(err, WqcError::DataUnavailable { ref source_id, .. } if source_id == "minha_tabela"));
    }

    #[test]
    fn missing_table_is_data_unavailable() {
        let db = sample_db();
        db.conn
            .borrow()
            .execute_batch("DROP TABLE spectral_observations")
            .unwrap();
        let err = db.read_table("spectral_observations").unwrap_err();
        assert!(matches!(err, WqcError::DataUnavailable { .. }));
    }
}
