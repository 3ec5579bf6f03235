//! Month range and cluster filtering of the active table.

use std::collections::BTreeSet;
use wqc_types::{ClusterLabel, ClusterSelection, MonthRange, Observation, ObservationTable};

/// Rows of `table` whose month lies in `months` and whose cluster is in the
/// resolved `selection`, in table order.
///
/// `options` are the cluster options of the same table; they give
/// [`ClusterSelection::All`] its meaning. Unlabelled rows never match.
pub fn filter_rows<'a>(
    table: &'a ObservationTable,
    months: MonthRange,
    selection: &ClusterSelection,
    options: &[ClusterLabel],
) -> Vec<&'a Observation> {
    let clusters: BTreeSet<ClusterLabel> = selection.resolve(options);
    table
        .rows()
        .iter()
        .filter(|row| months.contains(row.month))
        .filter(|row| row.cluster.is_some_and(|c| clusters.contains(&c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::obs;

    fn table() -> ObservationTable {
        ObservationTable::new(vec![
            obs(1.0, 1.0, 1, Some(0), "A", "Nitrate"),
            obs(2.0, 2.0, 3, Some(1), "B", "Nitrate"),
            obs(3.0, 3.0, 6, Some(2), "C", "Lead"),
            obs(4.0, 4.0, 6, None, "D", "Lead"),
            obs(5.0, 5.0, 9, Some(1), "E", "Boron"),
            obs(6.0, 6.0, 12, Some(4), "F", "Boron"),
        ])
    }

    fn locs(rows: &[&Observation]) -> Vec<String> {
        rows.iter().map(|r| r.monitoring_loc_id.clone()).collect()
    }

    #[test]
    fn full_year_and_all_clusters_keeps_labelled_rows() {
        let t = table();
        let options = t.cluster_options();
        let rows = filter_rows(&t, MonthRange::full_year(), &ClusterSelection::All, &options);
        assert_eq!(locs(&rows), vec!["A", "B", "C", "E", "F"]);
    }

    #[test]
    fn exact_for_every_month_range() {
        let t = table();
        let options = t.cluster_options();
        let selection = ClusterSelection::Only([1, 2].into_iter().collect());
        for start in 1..=12 {
            for end in start..=12 {
                let months = MonthRange::new(start, end).unwrap();
                let rows = filter_rows(&t, months, &selection, &options);
                let expected: Vec<&Observation> = t
                    .rows()
                    .iter()
                    .filter(|r| r.month >= start && r.month <= end)
                    .filter(|r| matches!(r.cluster, Some(1) | Some(2)))
                    .collect();
                assert_eq!(rows, expected, "range {}-{}", start, end);
            }
        }
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let t = table();
        let options = t.cluster_options();
        let rows = filter_rows(
            &t,
            MonthRange::full_year(),
            &ClusterSelection::Only(BTreeSet::new()),
            &options,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn month_range_without_rows_is_empty() {
        let t = table();
        let options = t.cluster_options();
        let rows = filter_rows(&t, MonthRange::new(10, 11).unwrap(), &ClusterSelection::All, &options);
        assert!(rows.is_empty());
    }
}
