//! Build the map view for a set of aggregated points.
//!
//! The view is a plain serializable description (center, zoom, size and
//! marker specs); the browser side hands it to Leaflet.

use crate::aggregate::AggregatedPoint;
use crate::config::MapConfig;
use crate::palette::cluster_color;
use serde::Serialize;
use wqc_types::{Result, WqcError};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Latitude/longitude extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// `None` when there are no points.
    pub fn from_points(points: &[AggregatedPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = BoundingBox {
            lat_min: first.y,
            lat_max: first.y,
            lon_min: first.x,
            lon_max: first.x,
        };
        Some(points.iter().skip(1).fold(init, |b, p| BoundingBox {
            lat_min: b.lat_min.min(p.y),
            lat_max: b.lat_max.max(p.y),
            lon_min: b.lon_min.min(p.x),
            lon_max: b.lon_max.max(p.x),
        }))
    }

    /// Midpoint of the box on each axis.
    pub fn center(&self) -> LatLon {
        LatLon {
            lat: (self.lat_min + self.lat_max) / 2.0,
            lon: (self.lon_min + self.lon_max) / 2.0,
        }
    }
}

/// One circle marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub position: LatLon,
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    /// Popup body (HTML, values escaped)
    pub popup: String,
    pub popup_max_width: u32,
}

/// Everything needed to draw the clusters map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    pub markers: Vec<MarkerSpec>,
}

impl MapView {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Popup text for one point.
pub fn popup_text(point: &AggregatedPoint) -> String {
    format!(
        "Location Name: {}<br>Cluster: {}<br>Analytes: {}",
        html_escape::encode_text(&point.monitoring_loc_id),
        point.cluster,
        html_escape::encode_text(&point.analytes)
    )
}

/// Center a map on `points` and create one marker per point.
///
/// Fails with [`WqcError::EmptyFilterResult`] when `points` is empty, since
/// there is no extent to center on.
pub fn build_map(points: &[AggregatedPoint], config: &MapConfig) -> Result<MapView> {
    let bounds = BoundingBox::from_points(points).ok_or(WqcError::EmptyFilterResult)?;

    let markers = points
        .iter()
        .map(|p| {
            let color = cluster_color(p.cluster);
            MarkerSpec {
                position: LatLon { lat: p.y, lon: p.x },
                radius: config.marker_radius,
                color: color.to_string(),
                fill_color: color.to_string(),
                fill_opacity: config.fill_opacity,
                popup: popup_text(p),
                popup_max_width: config.popup_max_width,
            }
        })
        .collect();

    Ok(MapView {
        center: bounds.center(),
        zoom: config.zoom,
        width: config.width,
        height: config.height,
        markers,
    })
}
