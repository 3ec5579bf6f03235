//! SQL schema definitions for the observation store.
//!
//! One table per clustering method, identical in shape. The schema is applied
//! as a single batch when the database is opened.

/// Returns the full SQL schema as a single batch string.
///
/// Creates `kmeans_observations` and `spectral_observations`, each with
/// columns `x, y, month, cluster, monitoring_loc_id, analyte_primary_name`.
/// `cluster` is nullable; rows keep their insertion order through the
/// implicit rowid.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS kmeans_observations (
        x REAL NOT NULL,
        y REAL NOT NULL,
        month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
        cluster INTEGER,
        monitoring_loc_id TEXT NOT NULL,
        analyte_primary_name TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_kmeans_month ON kmeans_observations(month);
    CREATE INDEX IF NOT EXISTS idx_kmeans_cluster ON kmeans_observations(cluster);

    CREATE TABLE IF NOT EXISTS spectral_observations (
        x REAL NOT NULL,
        y REAL NOT NULL,
        month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
        cluster INTEGER,
        monitoring_loc_id TEXT NOT NULL,
        analyte_primary_name TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_spectral_month ON spectral_observations(month);
    CREATE INDEX IF NOT EXISTS idx_spectral_cluster ON spectral_observations(cluster);
    "#
}
