//! The render pass: selections in, "no data" or a map out.

use crate::aggregate::aggregate;
use crate::config::MapConfig;
use crate::filter::filter_rows;
use crate::loader::TableCache;
use crate::map::{build_map, MapView};
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use wqc_types::{ClusterLabel, ClusterSelection, ClusteringMethod, MonthRange, Result, TableSource, WqcError};

/// Current values of the three sidebar inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterInputs {
    pub method: ClusteringMethod,
    pub months: MonthRange,
    pub clusters: ClusterSelection,
}

/// What the page shows below the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    /// The filters matched no rows.
    NoData,
    Map(MapView),
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Options for the cluster selector, from the active table, descending.
    pub cluster_options: Vec<ClusterLabel>,
    /// Rows that passed the month and cluster filters.
    pub filtered_rows: usize,
    pub content: PageContent,
}

/// Process-scoped dashboard: the table cache plus map settings.
///
/// Sessions are held by the caller and threaded through
/// [`render`](Self::render).
pub struct Dashboard<S> {
    cache: TableCache<S>,
    config: MapConfig,
}

impl<S: TableSource> Dashboard<S> {
    pub fn new(source: S, config: MapConfig) -> Self {
        Self {
            cache: TableCache::new(source),
            config,
        }
    }

    pub fn cache(&self) -> &TableCache<S> {
        &self.cache
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Start a session on the configured default method.
    pub fn start_session(&self) -> Result<SessionState> {
        SessionState::start(&self.cache, self.config.default_method)
    }

    /// Run one render pass.
    ///
    /// Reloads only when `inputs.method` differs from the session's last
    /// method. On error the caller's `state` is left as it was.
    pub fn render(&self, state: &SessionState, inputs: &FilterInputs) -> Result<(SessionState, RenderOutput)> {
        let state = if inputs.method != state.last_method() {
            log::info!(
                "[WQC] dashboard: method changed {} -> {}",
                state.last_method(),
                inputs.method
            );
            let table = self.cache.load(inputs.method)?;
            SessionState::with_table(table, inputs.method)
        } else {
            state.clone()
        };

        let table = state.active_table();
        let cluster_options = table.cluster_options();
        let rows = filter_rows(table, inputs.months, &inputs.clusters, &cluster_options);
        let filtered_rows = rows.len();

        let content = if rows.is_empty() {
            PageContent::NoData
        } else {
            let points = aggregate(rows);
            match build_map(&points, &self.config) {
                Ok(view) => PageContent::Map(view),
                Err(WqcError::EmptyFilterResult) => PageContent::NoData,
                Err(e) => return Err(e),
            }
        };

        match &content {
            PageContent::NoData => log::info!(
                "[WQC] dashboard: no data for months {} and clusters {:?}",
                inputs.months,
                inputs.clusters
            ),
            PageContent::Map(view) => log::info!(
                "[WQC] dashboard: {} rows -> {} markers",
                filtered_rows,
                view.markers.len()
            ),
        }

        Ok((
            state,
            RenderOutput {
                cluster_options,
                filtered_rows,
                content,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::{obs, CountingSource};
    use crate::map::LatLon;
    use std::rc::Rc;

    fn dashboard() -> Dashboard<CountingSource> {
        let source = CountingSource::default()
            .with(
                ClusteringMethod::KMeans,
                vec![
                    obs(10.0, 20.0, 3, Some(1), "L1", "Nitrate"),
                    obs(10.0, 20.0, 3, Some(1), "L1", "Arsenic"),
                ],
            )
            .with(
                ClusteringMethod::Spectral,
                vec![
                    obs(-121.0, 38.0, 6, Some(2), "S1", "Lead"),
                    obs(-120.0, 39.0, 7, Some(0), "S2", "Boron"),
                    obs(-119.0, 40.0, 7, None, "S3", "Boron"),
                ],
            );
        Dashboard::new(source, MapConfig::default())
    }

    fn inputs(method: ClusteringMethod) -> FilterInputs {
        FilterInputs {
            method,
            ..FilterInputs::default()
        }
    }

    #[test]
    fn end_to_end_single_location() {
        let dash = dashboard();
        let state = dash.start_session().unwrap();
        let filters = FilterInputs {
            method: ClusteringMethod::KMeans,
            months: MonthRange::new(1, 12).unwrap(),
            clusters: ClusterSelection::Only([1].into_iter().collect()),
        };

        let (_, output) = dash.render(&state, &filters).unwrap();
        assert_eq!(output.cluster_options, vec![1]);
        assert_eq!(output.filtered_rows, 2);

        let PageContent::Map(view) = output.content else {
            panic!("expected a map");
        };
        assert_eq!(view.markers.len(), 1);
        let marker = &view.markers[0];
        assert_eq!(marker.position, LatLon { lat: 20.0, lon: 10.0 });
        assert_eq!(marker.color, "blue");
        assert!(marker.popup.ends_with("Analytes: Nitrate, Arsenic"));
        assert_eq!(view.center, LatLon { lat: 20.0, lon: 10.0 });
    }

    #[test]
    fn same_method_never_reloads() {
        let dash = dashboard();
        let mut state = dash.start_session().unwrap();
        for _ in 0..5 {
            let (next, _) = dash.render(&state, &inputs(ClusteringMethod::KMeans)).unwrap();
            assert!(Rc::ptr_eq(next.active_table(), state.active_table()));
            state = next;
        }
        assert_eq!(dash.cache().source().reads(ClusteringMethod::KMeans), 1);
        assert_eq!(dash.cache().source().reads(ClusteringMethod::Spectral), 0);
    }

    #[test]
    fn switching_methods_loads_each_source_once() {
        let dash = dashboard();
        let mut state = dash.start_session().unwrap();

        let (next, output) = dash.render(&state, &inputs(ClusteringMethod::Spectral)).unwrap();
        assert_eq!(next.last_method(), ClusteringMethod::Spectral);
        assert_eq!(output.cluster_options, vec![2, 0]);
        assert_eq!(dash.cache().source().reads(ClusteringMethod::Spectral), 1);
        state = next;

        for method in [
            ClusteringMethod::KMeans,
            ClusteringMethod::Spectral,
            ClusteringMethod::Spectral,
            ClusteringMethod::KMeans,
            ClusteringMethod::Spectral,
        ] {
            let (next, _) = dash.render(&state, &inputs(method)).unwrap();
            assert_eq!(next.last_method(), method);
            state = next;
        }
        assert_eq!(dash.cache().source().reads(ClusteringMethod::Spectral), 1);
        assert_eq!(dash.cache().source().reads(ClusteringMethod::KMeans), 1);
    }

    #[test]
    fn empty_filter_result_is_no_data() {
        let dash = dashboard();
        let state = dash.start_session().unwrap();
        let filters = FilterInputs {
            months: MonthRange::new(8, 12).unwrap(),
            ..FilterInputs::default()
        };
        let (_, output) = dash.render(&state, &filters).unwrap();
        assert_eq!(output.content, PageContent::NoData);
        assert_eq!(output.filtered_rows, 0);
        assert_eq!(output.cluster_options, vec![1], "options come from the active table");
    }

    #[test]
    fn cluster_options_ignore_filters_and_nulls() {
        let dash = dashboard();
        let state = dash.start_session().unwrap();
        let filters = FilterInputs {
            method: ClusteringMethod::Spectral,
            months: MonthRange::new(6, 6).unwrap(),
            clusters: ClusterSelection::Only([2].into_iter().collect()),
        };
        let (_, output) = dash.render(&state, &filters).unwrap();
        assert_eq!(output.cluster_options, vec![2, 0]);
        assert_eq!(output.filtered_rows, 1);
    }

    #[test]
    fn failed_reload_keeps_previous_state() {
        let dash = dashboard();
        let state = dash.start_session().unwrap();
        dash.cache().source().fail.set(true);

        let err = dash.render(&state, &inputs(ClusteringMethod::Spectral)).unwrap_err();
        assert!(matches!(err, WqcError::DataUnavailable { .. }));
        assert_eq!(state.last_method(), ClusteringMethod::KMeans);

        dash.cache().source().fail.set(false);
        let (next, _) = dash.render(&state, &inputs(ClusteringMethod::Spectral)).unwrap();
        assert_eq!(next.last_method(), ClusteringMethod::Spectral);
    }

    #[test]
    fn default_method_comes_from_config() {
        let source = CountingSource::default().with(ClusteringMethod::Spectral, Vec::new());
        let config = MapConfig {
            default_method: ClusteringMethod::Spectral,
            ..MapConfig::default()
        };
        let dash = Dashboard::new(source, config);
        let state = dash.start_session().unwrap();
        assert_eq!(state.last_method(), ClusteringMethod::Spectral);
        let (_, output) = dash.render(&state, &inputs(ClusteringMethod::Spectral)).unwrap();
        assert_eq!(output.content, PageContent::NoData);
        assert!(output.cluster_options.is_empty());
    }
}
