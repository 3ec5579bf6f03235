use crate::error::Result;
use crate::observation::ObservationTable;

/// Anything that can materialize a whole source table by identifier.
///
/// Implemented by the SQLite store; reads are full-table and unfiltered.
pub trait TableSource {
    fn read_table(&self, source_id: &str) -> Result<ObservationTable>;
}
