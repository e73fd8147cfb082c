//! Live time-series data from the backend and its chart figure.
//!
//! The backend answers `GET /api/timeseries/?location=..&dataset=..` with
//! `{ location, dataset, times, values }`. The figure produced here is
//! handed to Plotly as JSON.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default path of the backend time-series endpoint.
pub const DEFAULT_ENDPOINT: &str = "/api/timeseries/";

/// Query parameters of one time-series request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesQuery {
    pub location: String,
    pub dataset: String,
}

impl TimeSeriesQuery {
    pub fn new(location: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            dataset: dataset.into(),
        }
    }

    /// Request URL for `endpoint`, encoding each parameter with `encode`.
    ///
    /// The browser passes `encodeURIComponent`; the native client lets
    /// `reqwest` build the query instead.
    pub fn url_with<F>(&self, endpoint: &str, encode: F) -> String
    where
        F: Fn(&str) -> String,
    {
        format!(
            "{}?location={}&dataset={}",
            endpoint,
            encode(&self.location),
            encode(&self.dataset)
        )
    }
}

/// A timestamp as sent by the backend: ISO text or epoch number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Epoch(f64),
}

/// Decoded response of the time-series endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub location: String,
    pub dataset: String,
    pub times: Vec<Timestamp>,
    /// Gaps arrive as `null`.
    pub values: Vec<Option<f64>>,
}

impl TimeSeries {
    /// Decode a response body. Missing fields or wrong types are errors.
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Legend entry: `"<location> <dataset>"`.
    pub fn series_name(&self) -> String {
        format!("{} {}", self.location, self.dataset)
    }

    /// Line-plus-markers scatter trace.
    pub fn trace(&self) -> Value {
        json!({
            "x": self.times,
            "y": self.values,
            "type": "scatter",
            "mode": "lines+markers",
            "name": self.series_name(),
        })
    }

    pub fn layout(&self) -> Value {
        json!({
            "title": format!("{} - {}", self.location, self.dataset),
            "xaxis": { "title": "Time" },
            "yaxis": { "title": "Value" },
        })
    }

    /// Latest non-null reading, for summaries.
    pub fn last_reading(&self) -> Option<(&Timestamp, f64)> {
        self.times
            .iter()
            .zip(self.values.iter())
            .rev()
            .find_map(|(t, v)| v.map(|v| (t, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "location": "Bismarck",
        "dataset": "Gauge Height",
        "times": ["2024-01-01T00:00:00", "2024-01-01T01:00:00", 1704074400000],
        "values": [10.5, null, 11.25]
    }"#;

    #[test]
    fn decodes_response() {
        let series = TimeSeries::from_json(BODY).unwrap();
        assert_eq!(series.location, "Bismarck");
        assert_eq!(series.len(), 3);
        assert_eq!(series.times[2], Timestamp::Epoch(1704074400000.0));
        assert_eq!(series.values[1], None);
    }

    #[test]
    fn missing_fields_are_errors() {
        assert!(TimeSeries::from_json(r#"{"location": "Bismarck", "times": [], "values": []}"#).is_err());
        assert!(TimeSeries::from_json("<html>502</html>").is_err());
    }

    #[test]
    fn trace_and_layout() {
        let series = TimeSeries::from_json(BODY).unwrap();
        let trace = series.trace();
        assert_eq!(trace["mode"], "lines+markers");
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["name"], "Bismarck Gauge Height");
        assert_eq!(trace["x"][0], "2024-01-01T00:00:00");
        assert!(trace["y"][1].is_null());

        let layout = series.layout();
        assert_eq!(layout["title"], "Bismarck - Gauge Height");
        assert_eq!(layout["xaxis"]["title"], "Time");
        assert_eq!(layout["yaxis"]["title"], "Value");
    }

    #[test]
    fn last_reading_skips_gaps() {
        let series = TimeSeries::from_json(
            r#"{"location": "Mott", "dataset": "Rain", "times": ["a", "b"], "values": [1.0, null]}"#,
        )
        .unwrap();
        let (t, v) = series.last_reading().unwrap();
        assert_eq!(t, &Timestamp::Text("a".to_string()));
        assert!((v - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn query_url() {
        let query = TimeSeriesQuery::new("Little Eagle", "Gauge Height");
        let url = query.url_with(DEFAULT_ENDPOINT, |s| s.replace(' ', "%20"));
        assert_eq!(
            url,
            "/api/timeseries/?location=Little%20Eagle&dataset=Gauge%20Height"
        );
    }
}
