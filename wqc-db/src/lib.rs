//! SQLite storage layer for clustered water quality observations.
//!
//! Holds one table per clustering method. The dashboard app loads the
//! embedded fixture CSVs into an in-memory database; the CLI works against
//! an on-disk file.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in consuming crates
//! - Full-table reads exposed through [`wqc_types::TableSource`]
//!
//! # Usage
//!
//! ```rust
//! use wqc_db::Database;
//! use wqc_types::{ClusteringMethod, TableSource};
//!
//! let db = Database::new().unwrap();
//! db.load_observations(
//!     ClusteringMethod::KMeans,
//!     "x,y,month,cluster,monitoring_loc_id,analyte_primary_name\n-121.5,38.5,3,1,L1,Nitrate\n",
//! )
//! .unwrap();
//!
//! let table = db.read_table("kmeans_observations").unwrap();
//! assert_eq!(table.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `kmeans_observations` - rows labelled by K-means
//! - `spectral_observations` - rows labelled by spectral clustering

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// SQLite database holding the clustered observation tables.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use wqc_db::Database;
/// use wqc_types::ClusteringMethod;
///
/// let db = Database::new().unwrap();
/// assert_eq!(db.count_observations(ClusteringMethod::Spectral).unwrap(), 0);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_observations`](Self::load_observations) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    /// Open (or create) an on-disk database and apply the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        log::info!("[WQC] db: opened {}", path.as_ref().display());
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wqc_types::{ClusteringMethod, TableSource};

    const CSV: &str = "\
x,y,month,cluster,monitoring_loc_id,analyte_primary_name
-121.5,38.5,3,1,L1,Nitrate
";

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        // Both should reference the same underlying connection
        db.load_observations(ClusteringMethod::KMeans, CSV).unwrap();
        let table = db2.read_table("kmeans_observations").unwrap();
        assert_eq!(table.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        for method in ClusteringMethod::ALL {
            let table = db.read_table(method.source_id()).unwrap();
            assert!(table.is_empty(), "New database should have no rows");
        }
    }

    #[test]
    fn on_disk_database_persists_rows() {
        let path = std::env::temp_dir().join(format!("wqc-db-test-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);
        {
            let db = Database::open(&path).unwrap();
            db.load_observations(ClusteringMethod::Spectral, CSV).unwrap();
        }
        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.count_observations(ClusteringMethod::Spectral).unwrap(), 1);
        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
