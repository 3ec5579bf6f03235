//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the sidebar selections and render results into a single
//! struct provided via `use_context_provider`. Child components retrieve it
//! with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wqc_types::{ClusterLabel, ClusterSelection, ClusteringMethod, MonthRange};

/// Shared application state for the clusters map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the first table is still loading
    pub loading: Signal<bool>,
    /// Error message if a load failed
    pub error_msg: Signal<Option<String>>,
    /// Selected clustering method
    pub method: Signal<ClusteringMethod>,
    /// Selected inclusive month range
    pub months: Signal<MonthRange>,
    /// Selected clusters
    pub clusters: Signal<ClusterSelection>,
    /// Cluster options of the active table, descending
    pub cluster_options: Signal<Vec<ClusterLabel>>,
    /// True when the last render pass matched no rows
    pub no_data: Signal<bool>,
}

impl AppState {
    /// Create a new AppState starting on `method` with every filter open.
    pub fn new(method: ClusteringMethod) -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            method: Signal::new(method),
            months: Signal::new(MonthRange::full_year()),
            clusters: Signal::new(ClusterSelection::All),
            cluster_options: Signal::new(Vec::new()),
            no_data: Signal::new(false),
        }
    }
}
