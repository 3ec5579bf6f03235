//! Data processing for the clusters dashboard.
//!
//! One render pass runs the whole pipeline:
//!
//! 1. [`dashboard::Dashboard::render`] compares the selected clustering method
//!    with the session's last one and reloads through the [`loader::TableCache`]
//!    only on change.
//! 2. [`filter`] narrows the active table by month range and cluster set.
//! 3. [`aggregate`] collapses the filtered rows to one point per location.
//! 4. [`map`] centers a map on the points and builds one marker each.

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod loader;
pub mod map;
pub mod palette;
pub mod session;

pub use aggregate::AggregatedPoint;
pub use config::MapConfig;
pub use dashboard::{Dashboard, FilterInputs, PageContent, RenderOutput};
pub use loader::TableCache;
pub use map::{BoundingBox, LatLon, MapView, MarkerSpec};
pub use session::SessionState;
