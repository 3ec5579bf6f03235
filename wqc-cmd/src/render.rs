//! Offline render pass: the same pipeline the dashboard runs per interaction.

use log::info;
use serde::Serialize;
use wqc_data::{Dashboard, FilterInputs, MapConfig, MapView, PageContent};
use wqc_db::Database;
use wqc_types::{ClusterLabel, ClusterSelection, ClusteringMethod, MonthRange};
use wqc_utils::months::range_label;

pub struct RenderArgs {
    pub method: ClusteringMethod,
    pub months: MonthRange,
    pub clusters: ClusterSelection,
    pub config: Option<String>,
    pub output: Option<String>,
}

/// JSON written by the `render` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub method: ClusteringMethod,
    pub months: MonthRange,
    pub cluster_options: Vec<ClusterLabel>,
    pub filtered_rows: usize,
    /// `None` when the filters matched no rows
    pub map: Option<MapView>,
}

/// Start a session on the requested method and run one render pass.
pub fn render_report(db: Database, config: MapConfig, args: &RenderArgs) -> anyhow::Result<RenderReport> {
    let config = MapConfig {
        default_method: args.method,
        ..config
    };
    let dashboard = Dashboard::new(db, config);
    let state = dashboard.start_session()?;
    let inputs = FilterInputs {
        method: args.method,
        months: args.months,
        clusters: args.clusters.clone(),
    };
    let (_, output) = dashboard.render(&state, &inputs)?;

    let map = match output.content {
        PageContent::NoData => {
            info!("No data to display.");
            None
        }
        PageContent::Map(view) => {
            info!(
                "{} markers for {} ({})",
                view.markers.len(),
                args.method,
                range_label(args.months.start(), args.months.end())
            );
            Some(view)
        }
    };

    Ok(RenderReport {
        method: args.method,
        months: args.months,
        cluster_options: output.cluster_options,
        filtered_rows: output.filtered_rows,
        map,
    })
}

pub fn run_render(database: &str, args: RenderArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => MapConfig::from_json_file(path)?,
        None => MapConfig::default(),
    };
    let db = Database::open(database)?;
    let report = render_report(db, config, &args)?;
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Render complete. Output: {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
