//! Collapse filtered rows into one map point per location and cluster.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use wqc_types::{ClusterLabel, Observation};

/// Separator between distinct analyte names in a point's display string.
pub const ANALYTE_SEPARATOR: &str = ", ";

/// All filtered observations sharing position, cluster and location id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPoint {
    pub x: f64,
    pub y: f64,
    pub cluster: ClusterLabel,
    pub monitoring_loc_id: String,
    /// Distinct analyte names, first occurrence first, joined by `", "`.
    pub analytes: String,
}

impl AggregatedPoint {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then(self.y.total_cmp(&other.y))
            .then(self.cluster.cmp(&other.cluster))
            .then_with(|| self.monitoring_loc_id.cmp(&other.monitoring_loc_id))
    }

    /// View the point as a single observation row. Aggregating such rows
    /// again yields the same points.
    pub fn to_observation(&self, month: u32) -> Observation {
        Observation {
            x: self.x,
            y: self.y,
            month,
            cluster: Some(self.cluster),
            monitoring_loc_id: self.monitoring_loc_id.clone(),
            analyte_primary_name: self.analytes.clone(),
        }
    }
}

/// Exact-match group key. Coordinates compare by bit pattern, with `-0.0`
/// folded into `0.0`.
#[derive(PartialEq, Eq, Hash)]
struct GroupKey<'a> {
    x: u64,
    y: u64,
    cluster: ClusterLabel,
    loc: &'a str,
}

fn coordinate_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

struct Group<'a> {
    row: &'a Observation,
    cluster: ClusterLabel,
    analytes: Vec<&'a str>,
}

/// Group rows by `(x, y, cluster, monitoring_loc_id)`.
///
/// Rows without a cluster are ignored; the filter never passes them. Points
/// come back sorted by their group key.
pub fn aggregate<'a, I>(rows: I) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut index: HashMap<GroupKey<'a>, usize> = HashMap::new();
    let mut groups: Vec<Group<'a>> = Vec::new();

    for row in rows {
        let Some(cluster) = row.cluster else {
            continue;
        };
        let key = GroupKey {
            x: coordinate_bits(row.x),
            y: coordinate_bits(row.y),
            cluster,
            loc: &row.monitoring_loc_id,
        };
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                row,
                cluster,
                analytes: Vec::new(),
            });
            groups.len() - 1
        });
        let analytes = &mut groups[slot].analytes;
        let name = row.analyte_primary_name.as_str();
        if !analytes.contains(&name) {
            analytes.push(name);
        }
    }

    let mut points: Vec<AggregatedPoint> = groups
        .into_iter()
        .map(|g| AggregatedPoint {
            x: g.row.x,
            y: g.row.y,
            cluster: g.cluster,
            monitoring_loc_id: g.row.monitoring_loc_id.clone(),
            analytes: g.analytes.join(ANALYTE_SEPARATOR),
        })
        .collect();
    points.sort_by(|a, b| a.key_cmp(b));
    points
}
