//! Core types shared by every crate in the water quality clusters workspace.
//!
//! - `observation`: one precomputed, cluster-labelled monitoring observation
//! - `method`: the clustering methods and the data source each one reads
//! - `month_range`: inclusive month filter
//! - `selection`: which cluster labels the user has selected
//! - `source`: the seam between the data loader and the store
//! - `error`: the workspace error type

pub mod error;
pub mod method;
pub mod month_range;
pub mod observation;
pub mod selection;
pub mod source;

pub use error::{Result, WqcError};
pub use method::ClusteringMethod;
pub use month_range::MonthRange;
pub use observation::{ClusterLabel, Observation, ObservationTable};
pub use selection::ClusterSelection;
pub use source::TableSource;
