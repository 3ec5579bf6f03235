//! Reusable Dioxus RSX components for the clusters map.

mod cluster_selector;
mod error_display;
mod loading_spinner;
mod map_container;
mod map_header;
mod method_selector;
mod month_range_selector;
mod no_data_notice;

pub use cluster_selector::ClusterSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_header::MapHeader;
pub use method_selector::MethodSelector;
pub use month_range_selector::MonthRangeSelector;
pub use no_data_notice::NoDataNotice;
