//! Build an on-disk observation database from CSV exports.

use log::info;
use wqc_db::Database;
use wqc_types::ClusteringMethod;

/// Load whichever CSVs are given into `database`.
///
/// Returns the number of rows inserted per method. Rows are appended, so
/// importing the same file twice duplicates it.
pub fn run_import(
    database: &str,
    kmeans_csv: Option<&str>,
    spectral_csv: Option<&str>,
) -> anyhow::Result<Vec<(ClusteringMethod, usize)>> {
    if kmeans_csv.is_none() && spectral_csv.is_none() {
        anyhow::bail!("Nothing to import: pass --kmeans-csv and/or --spectral-csv");
    }

    let db = Database::open(database)?;
    let mut imported = Vec::new();

    for (method, path) in [
        (ClusteringMethod::KMeans, kmeans_csv),
        (ClusteringMethod::Spectral, spectral_csv),
    ] {
        let Some(path) = path else {
            continue;
        };
        let csv_data = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
        let count = db.load_observations(method, &csv_data)?;
        info!("Imported {} {} rows from {}", count, method, path);
        imported.push((method, count));
    }

    info!("Import complete. Output: {}", database);
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_requires_a_csv() {
        let db = std::env::temp_dir().join("wqc-import-none.db");
        assert!(run_import(db.to_str().unwrap(), None, None).is_err());
    }

    #[test]
    fn import_loads_each_given_method() {
        let dir = std::env::temp_dir();
        let db = dir.join(format!("wqc-import-{}.db", std::process::id()));
        let csv = dir.join(format!("wqc-import-{}.csv", std::process::id()));
        let _ = std::fs::remove_file(&db);
        std::fs::write(
            &csv,
            "x,y,month,cluster,monitoring_loc_id,analyte_primary_name\n10,20,3,1,L1,Nitrate\n10,20,4,1,L1,Arsenic\n",
        )
        .unwrap();

        let imported = run_import(db.to_str().unwrap(), None, Some(csv.to_str().unwrap())).unwrap();
        assert_eq!(imported, vec![(ClusteringMethod::Spectral, 2)]);

        let reopened = Database::open(&db).unwrap();
        assert_eq!(reopened.count_observations(ClusteringMethod::Spectral).unwrap(), 2);
        assert_eq!(reopened.count_observations(ClusteringMethod::KMeans).unwrap(), 0);

        drop(reopened);
        let _ = std::fs::remove_file(&db);
        let _ = std::fs::remove_file(&csv);
    }

    #[test]
    fn missing_csv_is_an_error() {
        let db = std::env::temp_dir().join(format!("wqc-import-missing-{}.db", std::process::id()));
        let result = run_import(db.to_str().unwrap(), Some("/nonexistent/kmeans.csv"), None);
        assert!(result.is_err());
        let _ = std::fs::remove_file(&db);
    }
}
