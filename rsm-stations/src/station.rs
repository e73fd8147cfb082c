use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading registry entries that are river gauges.
pub const GAUGE_COUNT: usize = 13;
/// Registry index where weather (mesonet) stations begin.
pub const MESONET_START: usize = 19;

/// Kind of monitoring station, derived from its position in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationCategory {
    /// River sensor gauge
    Gauge,
    /// Dam with reservoir readings
    Dam,
    /// Mesonet weather station
    Mesonet,
}

impl StationCategory {
    pub const ALL: [StationCategory; 3] = [
        StationCategory::Gauge,
        StationCategory::Dam,
        StationCategory::Mesonet,
    ];

    /// Category for the station at `index` in the registry.
    ///
    /// Indices 0-12 are gauges, 13-18 dams, and everything after that
    /// is a mesonet station.
    pub fn from_index(index: usize) -> Self {
        if index < GAUGE_COUNT {
            StationCategory::Gauge
        } else if index < MESONET_START {
            StationCategory::Dam
        } else {
            StationCategory::Mesonet
        }
    }

    /// Marker color used on the map.
    pub fn marker_color(&self) -> &'static str {
        match self {
            StationCategory::Gauge => "red",
            StationCategory::Dam => "blue",
            StationCategory::Mesonet => "green",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StationCategory::Gauge => "Gauge",
            StationCategory::Dam => "Dam",
            StationCategory::Mesonet => "Mesonet",
        }
    }
}

impl fmt::Display for StationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A monitoring location with fixed coordinates.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Display name, also used to find the station's modal and graphs
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    pub category: StationCategory,
}

impl Station {
    /// DOM id of the station's modal: the name with all whitespace removed.
    pub fn modal_id(&self) -> String {
        strip_whitespace(&self.name)
    }

    /// Name of the legacy page global holding this station's graph URLs,
    /// e.g. `LittleEagleURLS`.
    pub fn legacy_urls_var(&self) -> String {
        format!("{}URLS", self.modal_id())
    }

    /// `[longitude, latitude]`, the order the map widget expects.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

/// Remove every whitespace character from `s`.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries() {
        assert_eq!(StationCategory::from_index(0), StationCategory::Gauge);
        assert_eq!(StationCategory::from_index(12), StationCategory::Gauge);
        assert_eq!(StationCategory::from_index(13), StationCategory::Dam);
        assert_eq!(StationCategory::from_index(18), StationCategory::Dam);
        assert_eq!(StationCategory::from_index(19), StationCategory::Mesonet);
        assert_eq!(StationCategory::from_index(27), StationCategory::Mesonet);
    }

    #[test]
    fn marker_colors() {
        for i in 0..40 {
            let expected = if i < 13 {
                "red"
            } else if i < 19 {
                "blue"
            } else {
                "green"
            };
            assert_eq!(StationCategory::from_index(i).marker_color(), expected, "index {}", i);
        }
    }

    #[test]
    fn modal_id_strips_spaces() {
        let station = Station {
            name: "Little Eagle".to_string(),
            latitude: 45.6486883,
            longitude: -100.8213889,
            category: StationCategory::Gauge,
        };
        assert_eq!(station.modal_id(), "LittleEagle");
        assert_eq!(station.legacy_urls_var(), "LittleEagleURLS");
        assert_eq!(station.lng_lat(), [-100.8213889, 45.6486883]);
    }
}
