//! Per-method summary of an observation database.

use log::info;
use serde::Serialize;
use wqc_db::models::ClusterCount;
use wqc_db::Database;
use wqc_types::ClusteringMethod;

#[derive(Debug, Clone, Serialize)]
pub struct MethodSummary {
    pub method: ClusteringMethod,
    pub observations: i64,
    pub clusters: Vec<ClusterCount>,
}

/// Log row and cluster counts for both methods.
pub fn run_inspect(database: &str) -> anyhow::Result<Vec<MethodSummary>> {
    let db = Database::open(database)?;
    let mut summaries = Vec::new();

    for method in ClusteringMethod::ALL {
        let observations = db.count_observations(method)?;
        let clusters = db.query_cluster_counts(method)?;
        info!("{}: {} observations in {}", method, observations, method.source_id());
        for c in &clusters {
            match c.cluster {
                Some(label) => info!(
                    "  cluster {}: {} observations at {} locations",
                    label, c.observations, c.locations
                ),
                None => info!("  unlabelled: {} observations", c.observations),
            }
        }
        summaries.push(MethodSummary {
            method,
            observations,
            clusters,
        });
    }

    Ok(summaries)
}
