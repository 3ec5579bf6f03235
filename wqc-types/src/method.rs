use crate::error::WqcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which precomputed labelling scheme is active.
///
/// Each method reads exactly one source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusteringMethod {
    #[default]
    KMeans,
    Spectral,
}

impl ClusteringMethod {
    /// Every method, in selector order.
    pub const ALL: [ClusteringMethod; 2] = [ClusteringMethod::KMeans, ClusteringMethod::Spectral];

    /// Label shown in the clustering type selector.
    pub fn label(&self) -> &'static str {
        match self {
            ClusteringMethod::KMeans => "K-means",
            ClusteringMethod::Spectral => "Spectral",
        }
    }

    /// Identifier of the table holding this method's observations.
    pub fn source_id(&self) -> &'static str {
        match self {
            ClusteringMethod::KMeans => "kmeans_observations",
            ClusteringMethod::Spectral => "spectral_observations",
        }
    }

    /// Reverse of [`source_id`](Self::source_id).
    pub fn from_source_id(source_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.source_id() == source_id)
    }
}

impl fmt::Display for ClusteringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClusteringMethod {
    type Err = WqcError;

    /// Accepts the selector label ("K-means") or a short name ("kmeans", "spectral").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "k-means" | "kmeans" => Ok(ClusteringMethod::KMeans),
            "spectral" => Ok(ClusteringMethod::Spectral),
            _ => Err(WqcError::UnknownMethod(s.to_string())),
        }
    }
}
