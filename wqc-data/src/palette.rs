//! Static cluster to marker color lookup.

use wqc_types::ClusterLabel;

/// Color used for any cluster label missing from [`CLUSTER_COLORS`].
pub const FALLBACK_COLOR: &str = "gray";

/// Marker colors for cluster labels 0-4.
pub const CLUSTER_COLORS: [(ClusterLabel, &str); 5] = [
    (0, "red"),
    (1, "blue"),
    (2, "green"),
    (3, "purple"),
    (4, "orange"),
];

/// Marker color for a cluster label, falling back to gray.
pub fn cluster_color(cluster: ClusterLabel) -> &'static str {
    match CLUSTER_COLORS.iter().find(|(label, _)| *label == cluster) {
        Some((_, color)) => *color,
        None => {
            log::debug!("[WQC] palette: no color for cluster {}, using {}", cluster, FALLBACK_COLOR);
            FALLBACK_COLOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_clusters() {
        assert_eq!(cluster_color(0), "red");
        assert_eq!(cluster_color(1), "blue");
        assert_eq!(cluster_color(2), "green");
        assert_eq!(cluster_color(3), "purple");
        assert_eq!(cluster_color(4), "orange");
    }

    #[test]
    fn unknown_clusters_fall_back_to_gray() {
        assert_eq!(cluster_color(5), FALLBACK_COLOR);
        assert_eq!(cluster_color(-1), FALLBACK_COLOR);
        assert_eq!(cluster_color(i64::MAX), FALLBACK_COLOR);
    }
}
