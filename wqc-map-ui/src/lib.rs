//! Shared Dioxus components and Leaflet bridge for the clusters map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Sidebar selectors, map container and notices

pub mod js_bridge;
pub mod state;
pub mod components;
