//! Per-session dashboard state.

use crate::loader::TableCache;
use std::rc::Rc;
use wqc_types::{ClusteringMethod, ObservationTable, Result, TableSource};

/// The state one browser session (or CLI run) carries between render passes.
///
/// The active table is never mutated; a method change swaps in another
/// table wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    active_table: Rc<ObservationTable>,
    last_method: ClusteringMethod,
}

impl SessionState {
    /// Start a session on `method`, loading its table through the cache.
    pub fn start<S: TableSource>(cache: &TableCache<S>, method: ClusteringMethod) -> Result<Self> {
        let active_table = cache.load(method)?;
        log::info!(
            "[WQC] session: started on {} with {} rows",
            method,
            active_table.len()
        );
        Ok(Self {
            active_table,
            last_method: method,
        })
    }

    pub(crate) fn with_table(active_table: Rc<ObservationTable>, last_method: ClusteringMethod) -> Self {
        Self {
            active_table,
            last_method,
        }
    }

    pub fn active_table(&self) -> &Rc<ObservationTable> {
        &self.active_table
    }

    /// Method selected on the previous render pass.
    pub fn last_method(&self) -> ClusteringMethod {
        self.last_method
    }
}
