//! Command implementations for the WQC CLI.
//!
//! Provides subcommands for building an observation database from CSV
//! exports, summarizing it, and running a dashboard render pass offline.

use clap::Subcommand;
use wqc_types::{ClusterSelection, ClusteringMethod, MonthRange};

pub mod import;
pub mod inspect;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Load clustering CSV exports into a SQLite database file
    Import {
        /// Path of the SQLite database (created if missing)
        #[arg(short = 'd', long)]
        database: String,

        /// CSV of K-means labelled observations
        #[arg(long)]
        kmeans_csv: Option<String>,

        /// CSV of spectral labelled observations
        #[arg(long)]
        spectral_csv: Option<String>,
    },

    /// Summarize row counts and clusters per method
    Inspect {
        #[arg(short = 'd', long)]
        database: String,
    },

    /// Run one render pass and write the map view as JSON
    Render {
        #[arg(short = 'd', long)]
        database: String,

        /// Clustering method: kmeans or spectral
        #[arg(short = 'm', long, default_value = "kmeans")]
        method: ClusteringMethod,

        /// Inclusive month range, e.g. 3-7
        #[arg(long, default_value = "1-12")]
        months: MonthRange,

        /// Comma separated cluster labels, or "all"
        #[arg(short = 'c', long, default_value = "all")]
        clusters: ClusterSelection,

        /// Optional JSON map config
        #[arg(long)]
        config: Option<String>,

        /// Output path (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Import {
            database,
            kmeans_csv,
            spectral_csv,
        } => {
            import::run_import(&database, kmeans_csv.as_deref(), spectral_csv.as_deref())?;
            Ok(())
        }
        Command::Inspect { database } => {
            inspect::run_inspect(&database)?;
            Ok(())
        }
        Command::Render {
            database,
            method,
            months,
            clusters,
            config,
            output,
        } => render::run_render(
            &database,
            render::RenderArgs {
                method,
                months,
                clusters,
                config,
                output,
            },
        ),
    }
}
