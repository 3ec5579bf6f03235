use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Integer tag assigned to an observation by a clustering method.
pub type ClusterLabel = i64;

/// A single cluster-labelled water quality observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Longitude in decimal degrees
    pub x: f64,
    /// Latitude in decimal degrees
    pub y: f64,
    /// Month of the sample (1-12)
    pub month: u32,
    /// Cluster label, if the method assigned one
    pub cluster: Option<ClusterLabel>,
    /// Monitoring location identifier
    pub monitoring_loc_id: String,
    /// Primary analyte measured
    pub analyte_primary_name: String,
}

/// A fully loaded source table, in source row order.
///
/// Tables are immutable once built; a session replaces its table wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct non-null cluster labels, sorted descending.
    pub fn cluster_options(&self) -> Vec<ClusterLabel> {
        let distinct: BTreeSet<ClusterLabel> = self.rows.iter().filter_map(|r| r.cluster).collect();
        distinct.into_iter().rev().collect()
    }
}

impl FromIterator<Observation> for ObservationTable {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
