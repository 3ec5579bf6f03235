//! Water Quality Clusters Map
//!
//! Pick a clustering result (K-means or Spectral), narrow it by month range
//! and cluster, and see one colored marker per monitoring location on a
//! Leaflet map.
//!
//! Data flow:
//! 1. `build.rs` copies both fixture CSVs into `OUT_DIR`.
//! 2. `include_str!` embeds them; on mount they are loaded into an in-memory
//!    SQLite database wrapped by a single `Dashboard` (the table cache).
//! 3. The session starts on the default method.
//! 4. On any sidebar change: one render pass, then either the "no data"
//!    notice or a Leaflet redraw.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use std::rc::Rc;
use wqc_data::{Dashboard, FilterInputs, MapConfig, PageContent, SessionState};
use wqc_db::Database;
use wqc_map_ui::components::{
    ClusterSelector, ErrorDisplay, LoadingSpinner, MapContainer, MapHeader, MethodSelector,
    MonthRangeSelector, NoDataNotice,
};
use wqc_map_ui::js_bridge;
use wqc_map_ui::state::AppState;
use wqc_types::ClusteringMethod;
use wqc_utils::months::range_label;

const KMEANS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/kmeans_observations.csv"));
const SPECTRAL_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spectral_observations.csv"));

/// DOM id for the Leaflet map container div.
const MAP_CONTAINER_ID: &str = "clusters-map";

type AppDashboard = Rc<Dashboard<Database>>;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting water quality clusters map");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("clusters-map-root"))
        .launch(App);
}

/// Load both embedded tables into a fresh in-memory database.
fn open_database() -> anyhow::Result<Database> {
    let db = Database::new()?;
    db.load_observations(ClusteringMethod::KMeans, KMEANS_CSV)?;
    db.load_observations(ClusteringMethod::Spectral, SPECTRAL_CSV)?;
    Ok(db)
}

#[component]
fn App() -> Element {
    let config = MapConfig::default();
    let mut state = use_context_provider(|| AppState::new(config.default_method));

    // Built once per page: the dashboard owns the table cache.
    let dashboard: Result<AppDashboard, String> = use_hook(|| {
        open_database()
            .map(|db| Rc::new(Dashboard::new(db, MapConfig::default())))
            .map_err(|e| format!("Failed to load observations: {}", e))
    });
    let mut session: Signal<Option<SessionState>> = use_signal(|| None);

    // ─── Effect 1: start the session once on mount ───
    use_effect({
        let dashboard = dashboard.clone();
        move || {
            match &dashboard {
                Ok(dash) => match dash.start_session() {
                    Ok(s) => session.set(Some(s)),
                    Err(e) => {
                        error!("Failed to start session: {}", e);
                        state.error_msg.set(Some(e.to_string()));
                    }
                },
                Err(e) => {
                    error!("{}", e);
                    state.error_msg.set(Some(e.clone()));
                }
            }
            state.loading.set(false);
            js_bridge::init_map();
        }
    });

    // ─── Effect 2: one render pass per sidebar change ───
    // Re-runs whenever loading, method, months or clusters change. The
    // session is peeked, not read, so writing it back does not retrigger.
    use_effect({
        let dashboard = dashboard.clone();
        move || {
            let loading = (state.loading)();
            let inputs = FilterInputs {
                method: (state.method)(),
                months: (state.months)(),
                clusters: (state.clusters)(),
            };

            if loading {
                return;
            }
            let Ok(dash) = &dashboard else {
                return;
            };
            let Some(current) = session.peek().clone() else {
                return;
            };

            match dash.render(&current, &inputs) {
                Ok((next, output)) => {
                    session.set(Some(next));
                    state.error_msg.set(None);
                    if *state.cluster_options.peek() != output.cluster_options {
                        state.cluster_options.set(output.cluster_options);
                    }
                    match output.content {
                        PageContent::NoData => {
                            js_bridge::destroy_map(MAP_CONTAINER_ID);
                            state.no_data.set(true);
                        }
                        PageContent::Map(view) => {
                            state.no_data.set(false);
                            js_bridge::render_cluster_map(MAP_CONTAINER_ID, &view.to_json());
                        }
                    }
                }
                Err(e) => {
                    error!("Render failed: {}", e);
                    state.error_msg.set(Some(e.to_string()));
                }
            }
        }
    });

    let months = (state.months)();
    let subtitle = format!(
        "{} clustering, {}",
        (state.method)(),
        range_label(months.start(), months.end())
    );

    // ─── Render ───
    rsx! {
        div {
            style: "display: flex; gap: 16px; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            aside {
                style: "width: 220px; flex-shrink: 0; padding-right: 12px; border-right: 1px solid #e0e0e0;",
                MethodSelector {}
                h3 { style: "margin: 16px 0 4px 0; font-size: 16px;", "Filter" }
                MonthRangeSelector {}
                ClusterSelector {}
            }

            main {
                style: "flex: 1; min-width: 0;",

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if *state.no_data.read() {
                    NoDataNotice {}
                } else {
                    MapHeader {
                        title: "Clusters Map".to_string(),
                        subtitle: subtitle,
                    }
                    MapContainer {
                        id: MAP_CONTAINER_ID.to_string(),
                        width: config.width,
                        height: config.height,
                        loading: session.read().is_none(),
                    }
                }
            }
        }
    }
}
