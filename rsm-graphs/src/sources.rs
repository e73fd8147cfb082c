//! Per-station graph URL lists supplied by the hosting page.
//!
//! The page template either injects a server-built mapping
//! (`station name -> [url, ...]`) or, on older pages, one global array per
//! station named `<NameNoSpaces>URLS`. The mapping wins; legacy lists are
//! the fallback; a station with neither has no graphs.

use rsm_stations::Station;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSources {
    graph_map: HashMap<String, Vec<String>>,
    /// Keyed by legacy variable name, e.g. `LittleEagleURLS`.
    legacy: HashMap<String, Vec<String>>,
}

/// String items of a JSON array; anything else yields nothing.
pub fn string_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

impl GraphSources {
    pub fn new(graph_map: HashMap<String, Vec<String>>) -> Self {
        Self {
            graph_map,
            legacy: HashMap::new(),
        }
    }

    /// Parse the server-injected mapping. Values that are not arrays are
    /// dropped, as are non-string array items.
    pub fn from_graph_map_json(json: &str) -> anyhow::Result<Self> {
        let raw: HashMap<String, Value> = serde_json::from_str(json)?;
        let graph_map = raw
            .iter()
            .filter(|(_, v)| v.is_array())
            .map(|(k, v)| (k.clone(), string_items(v)))
            .collect();
        Ok(Self::new(graph_map))
    }

    /// Register a legacy per-station list under its variable name.
    pub fn insert_legacy(&mut self, var_name: impl Into<String>, urls: Vec<String>) {
        self.legacy.insert(var_name.into(), urls);
    }

    /// URLs for one station: a non-empty mapping entry, else the legacy
    /// list, else nothing.
    pub fn urls_for(&self, station: &Station) -> Vec<String> {
        if let Some(urls) = self.graph_map.get(&station.name) {
            if !urls.is_empty() {
                return urls.clone();
            }
        }
        self.legacy
            .get(&station.legacy_urls_var())
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.graph_map.is_empty() && self.legacy.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsm_stations::StationRegistry;

    fn registry() -> StationRegistry {
        StationRegistry::parse_csv(
            "NAME,LATITUDE,LONGITUDE\nHazen,47.28,-101.62\nLittle Eagle,45.64,-100.82\nMott,46.38,-102.32\n",
        )
        .unwrap()
    }

    #[test]
    fn mapping_is_preferred() {
        let registry = registry();
        let mut sources = GraphSources::from_graph_map_json(
            r#"{"Hazen": ["/static/graphs/Elevation%20at%20Hazen.html"]}"#,
        )
        .unwrap();
        sources.insert_legacy("HazenURLS", vec!["graphs/old.html".to_string()]);
        let hazen = registry.find("Hazen").unwrap();
        assert_eq!(sources.urls_for(hazen), vec!["/static/graphs/Elevation%20at%20Hazen.html"]);
    }

    #[test]
    fn empty_mapping_entry_falls_back_to_legacy() {
        let registry = registry();
        let mut sources = GraphSources::from_graph_map_json(r#"{"Little Eagle": []}"#).unwrap();
        sources.insert_legacy("LittleEagleURLS", vec!["graphs/Stage at Little Eagle.html".to_string()]);
        let station = registry.find("Little Eagle").unwrap();
        assert_eq!(sources.urls_for(station), vec!["graphs/Stage at Little Eagle.html"]);
    }

    #[test]
    fn missing_everywhere_is_empty() {
        let registry = registry();
        let sources = GraphSources::default();
        assert!(sources.is_empty());
        assert!(sources.urls_for(registry.find("Mott").unwrap()).is_empty());
    }

    #[test]
    fn malformed_mapping_values_are_ignored() {
        let registry = registry();
        let sources = GraphSources::from_graph_map_json(
            r#"{"Hazen": "graphs/a.html", "Mott": ["graphs/b.html", 7, null]}"#,
        )
        .unwrap();
        assert!(sources.urls_for(registry.find("Hazen").unwrap()).is_empty());
        assert_eq!(sources.urls_for(registry.find("Mott").unwrap()), vec!["graphs/b.html"]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(GraphSources::from_graph_map_json("not json").is_err());
    }

    #[test]
    fn string_items_of_non_array() {
        assert!(string_items(&Value::Null).is_empty());
    }
}
