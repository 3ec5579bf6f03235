//! Map presentation settings.
//!
//! Serialized to JSON both for the Leaflet bridge and for the CLI's
//! optional `--config` file. Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wqc_types::ClusteringMethod;

/// Settings applied to every rendered map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Initial Leaflet zoom level
    pub zoom: u8,
    /// Circle marker radius in pixels
    pub marker_radius: f64,
    pub fill_opacity: f64,
    /// Maximum popup width in pixels
    pub popup_max_width: u32,
    /// Map width in pixels
    pub width: u32,
    /// Map height in pixels
    pub height: u32,
    /// Method selected when a session starts
    pub default_method: ClusteringMethod,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 8,
            marker_radius: 5.0,
            fill_opacity: 0.7,
            popup_max_width: 300,
            width: 1500,
            height: 800,
            default_method: ClusteringMethod::KMeans,
        }
    }
}

impl MapConfig {
    /// Read a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        log::info!("[WQC] config: loaded {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: MapConfig = serde_json::from_str(r#"{"zoom": 10, "defaultMethod": "spectral"}"#).unwrap();
        assert_eq!(config.zoom, 10);
        assert_eq!(config.default_method, ClusteringMethod::Spectral);
        assert_eq!(config.marker_radius, 5.0);
        assert_eq!(config.width, 1500);
        assert_eq!(config.height, 800);
    }

    #[test]
    fn reads_config_file() {
        let path = std::env::temp_dir().join(format!("wqc-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"popupMaxWidth": 250}"#).unwrap();
        let config = MapConfig::from_json_file(&path).unwrap();
        assert_eq!(config.popup_max_width, 250);
        assert_eq!(config.zoom, 8);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(MapConfig::from_json_file("/nonexistent/wqc-map.json").is_err());
    }
}
