use crate::station::{Station, StationCategory};
use anyhow::Context;
use csv::ReaderBuilder;

/// Embedded station list: `NAME,LATITUDE,LONGITUDE`, in marker order.
pub static STATIONS_CSV: &str = include_str!("../../fixtures/stations.csv");

/// Ordered, immutable list of every station on the map.
///
/// Built once at startup and handed to the marker and modal code by
/// reference; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    /// The built-in registry parsed from the embedded fixture.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::parse_csv(STATIONS_CSV)
    }

    /// Parse a station CSV (with headers) into a registry.
    ///
    /// Expected CSV columns: name, latitude, longitude. Categories are
    /// assigned by row position.
    pub fn parse_csv(csv_object: &str) -> anyhow::Result<Self> {
        let mut stations: Vec<Station> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for (index, row) in rdr.records().enumerate() {
            let record = row?;
            let name = record
                .get(0)
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .with_context(|| format!("row {}: missing station name", index + 1))?
                .to_string();
            let latitude = record
                .get(1)
                .unwrap_or("")
                .trim()
                .parse::<f64>()
                .with_context(|| format!("row {}: bad latitude for {}", index + 1, name))?;
            let longitude = record
                .get(2)
                .unwrap_or("")
                .trim()
                .parse::<f64>()
                .with_context(|| format!("row {}: bad longitude for {}", index + 1, name))?;
            stations.push(Station {
                name,
                latitude,
                longitude,
                category: StationCategory::from_index(index),
            });
        }
        log::info!("registry: loaded {} stations", stations.len());
        Ok(Self { stations })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Look up a station by its exact display name.
    pub fn find(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    /// Station names in registry order. This is the known-station list the
    /// graph categorizer strips from table titles.
    pub fn names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a StationRegistry {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}
