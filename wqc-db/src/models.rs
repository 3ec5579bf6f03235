//! Summary structs returned by the inspection queries.

use serde::Serialize;
use wqc_types::ClusterLabel;

/// Number of observations carrying one cluster label.
///
/// `cluster` is `None` for the rows the method left unlabelled.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClusterCount {
    pub cluster: Option<ClusterLabel>,
    pub observations: i64,
    /// Distinct monitoring locations among those observations.
    pub locations: i64,
}
