//! Page-level configuration for the station map.
//!
//! The hosting template may define `window.stationMapConfig` (JSON object,
//! every field optional) and the older `window.baseGraphUrl` string; see
//! `js_bridge::read_map_config`.

use rsm_graphs::timeseries::DEFAULT_ENDPOINT;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// DOM id of the map container
    pub map_container_id: String,
    pub map_style: String,
    /// Initial map center as `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    /// Mapbox access token, if the page has not set one already
    pub access_token: Option<String>,
    /// Prefix for relative graph paths
    pub base_graph_url: Option<String>,
    pub timeseries_endpoint: String,
    /// When set, clicking a marker also loads this live dataset
    pub live_dataset: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            map_container_id: "map".to_string(),
            map_style: "mapbox://styles/mapbox/streets-v12".to_string(),
            center: [-100.78, 46.8],
            zoom: 5.5,
            access_token: None,
            base_graph_url: None,
            timeseries_endpoint: DEFAULT_ENDPOINT.to_string(),
            live_dataset: None,
        }
    }
}

impl MapConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply the legacy `baseGraphUrl` global, which wins over the JSON config.
    pub fn with_base_graph_url(mut self, base: Option<String>) -> Self {
        if let Some(base) = base {
            self.base_graph_url = Some(base);
        }
        self
    }

    /// Base URL for graph frames; an empty string counts as unset.
    pub fn base(&self) -> Option<&str> {
        self.base_graph_url.as_deref().filter(|b| !b.is_empty())
    }

    pub fn live_dataset(&self) -> Option<&str> {
        self.live_dataset.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = MapConfig::from_json("{}").unwrap();
        assert_eq!(config, MapConfig::default());
        assert_eq!(config.map_container_id, "map");
        assert_eq!(config.timeseries_endpoint, "/api/timeseries/");
        assert_eq!(config.base(), None);
    }

    #[test]
    fn camel_case_fields() {
        let config = MapConfig::from_json(
            r#"{"baseGraphUrl": "/static/graphs/", "liveDataset": "Gauge Height", "zoom": 7}"#,
        )
        .unwrap();
        assert_eq!(config.base(), Some("/static/graphs/"));
        assert_eq!(config.live_dataset(), Some("Gauge Height"));
        assert!((config.zoom - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn legacy_base_overrides() {
        let config = MapConfig::default().with_base_graph_url(Some("https://cdn/graphs/".to_string()));
        assert_eq!(config.base(), Some("https://cdn/graphs/"));
        let config = config.with_base_graph_url(None);
        assert_eq!(config.base(), Some("https://cdn/graphs/"));
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let config = MapConfig::from_json(r#"{"baseGraphUrl": "", "liveDataset": ""}"#).unwrap();
        assert_eq!(config.base(), None);
        assert_eq!(config.live_dataset(), None);
    }

    #[test]
    fn wrong_types_are_errors() {
        assert!(MapConfig::from_json(r#"{"zoom": "close"}"#).is_err());
    }
}
