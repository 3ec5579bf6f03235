//! Memoized table loading.
//!
//! Source tables are static, so a table is read at most once per process and
//! the cache is never invalidated. Failed reads are not cached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wqc_types::{ClusteringMethod, ObservationTable, Result, TableSource};

/// Lazily populated mapping from source identifier to loaded table.
///
/// Owned by the process (the [`Dashboard`](crate::Dashboard)), not by any
/// session. Cloning the returned `Rc` is how sessions share a table.
pub struct TableCache<S> {
    source: S,
    tables: RefCell<HashMap<String, Rc<ObservationTable>>>,
}

impl<S: TableSource> TableCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            tables: RefCell::new(HashMap::new()),
        }
    }

    /// Return the table for `source_id`, reading it from the source only
    /// on the first successful request.
    pub fn get(&self, source_id: &str) -> Result<Rc<ObservationTable>> {
        if let Some(table) = self.tables.borrow().get(source_id) {
            log::debug!("[WQC] loader: cache hit for {}", source_id);
            return Ok(Rc::clone(table));
        }

        let table = match self.source.read_table(source_id) {
            Ok(table) => Rc::new(table),
            Err(e) => {
                log::warn!("[WQC] loader: failed to load {}: {}", source_id, e);
                return Err(e);
            }
        };
        log::info!(
            "[WQC] loader: cached {} ({} rows)",
            source_id,
            table.len()
        );
        self.tables
            .borrow_mut()
            .insert(source_id.to_string(), Rc::clone(&table));
        Ok(table)
    }

    /// Load the table behind a clustering method.
    pub fn load(&self, method: ClusteringMethod) -> Result<Rc<ObservationTable>> {
        self.get(method.source_id())
    }

    pub fn is_cached(&self, source_id: &str) -> bool {
        self.tables.borrow().contains_key(source_id)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
