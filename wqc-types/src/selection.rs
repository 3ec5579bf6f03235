use crate::error::WqcError;
use crate::observation::ClusterLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// The user's choice in the cluster multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClusterSelection {
    /// Every cluster available in the active table (the selector default).
    #[default]
    All,
    /// Only the listed clusters.
    Only(BTreeSet<ClusterLabel>),
}

impl ClusterSelection {
    /// Resolve against the options of the active table.
    ///
    /// Labels not present in `options` are kept; they simply match no rows.
    pub fn resolve(&self, options: &[ClusterLabel]) -> BTreeSet<ClusterLabel> {
        match self {
            ClusterSelection::All => options.iter().copied().collect(),
            ClusterSelection::Only(set) => set.clone(),
        }
    }

    /// Whether `cluster` is checked, given the available options.
    pub fn is_selected(&self, cluster: ClusterLabel) -> bool {
        match self {
            ClusterSelection::All => true,
            ClusterSelection::Only(set) => set.contains(&cluster),
        }
    }

    /// Toggle one label, materializing `All` from `options` first.
    pub fn toggle(&self, cluster: ClusterLabel, options: &[ClusterLabel]) -> Self {
        let mut set = self.resolve(options);
        if !set.remove(&cluster) {
            set.insert(cluster);
        }
        ClusterSelection::Only(set)
    }
}

impl FromStr for ClusterSelection {
    type Err = WqcError;

    /// Parses `"all"` or a comma separated list such as `"0,2,4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(ClusterSelection::All);
        }
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| {
                part.trim()
                    .parse::<ClusterLabel>()
                    .map_err(|_| WqcError::InvalidClusterList(s.to_string()))
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(ClusterSelection::Only)
    }
}
