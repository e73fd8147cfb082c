//! Fetch one live time series from a running backend.

use anyhow::Context;
use rsm_graphs::timeseries::{TimeSeries, TimeSeriesQuery, Timestamp};

/// Full endpoint URL for `server` and `endpoint`, joined with one slash.
pub fn endpoint_url(server: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        server.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Single request, no retry.
pub async fn fetch_time_series(
    client: &reqwest::Client,
    url: &str,
    query: &TimeSeriesQuery,
) -> anyhow::Result<TimeSeries> {
    client
        .get(url)
        .query(query)
        .send()
        .await
        .with_context(|| format!("requesting {}", url))?
        .error_for_status()?
        .json::<TimeSeries>()
        .await
        .context("decoding time series")
}

fn timestamp_text(t: &Timestamp) -> String {
    match t {
        Timestamp::Text(s) => s.clone(),
        Timestamp::Epoch(ms) => ms.to_string(),
    }
}

/// Human-readable summary of a fetched series.
pub fn summarize(series: &TimeSeries) -> String {
    let gaps = series.values.iter().filter(|v| v.is_none()).count();
    let mut out = format!(
        "{}: {} points ({} gaps)",
        series.series_name(),
        series.len(),
        gaps
    );
    if let (Some(first), Some(last)) = (series.times.first(), series.times.last()) {
        out.push_str(&format!(
            "\n  range: {} .. {}",
            timestamp_text(first),
            timestamp_text(last)
        ));
    }
    if let Some((time, value)) = series.last_reading() {
        out.push_str(&format!("\n  last reading: {} at {}", value, timestamp_text(time)));
    }
    out
}

pub async fn run_timeseries(
    server: &str,
    endpoint: &str,
    location: &str,
    dataset: &str,
) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let url = endpoint_url(server, endpoint);
    let query = TimeSeriesQuery::new(location, dataset);
    log::info!("Fetching {} for {} from {}", dataset, location, url);

    let series = fetch_time_series(&client, &url, &query).await?;
    println!("{}", summarize(&series));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_server_and_endpoint() {
        assert_eq!(
            endpoint_url("http://localhost:8000/", "/api/timeseries/"),
            "http://localhost:8000/api/timeseries/"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000", "api/timeseries/"),
            "http://localhost:8000/api/timeseries/"
        );
    }

    #[test]
    fn summary_reports_gaps_and_last_reading() {
        let series = TimeSeries::from_json(
            r#"{"location":"Bismarck","dataset":"Stage","times":["2024-01-01","2024-01-02","2024-01-03"],"values":[1.5,2.25,null]}"#,
        )
        .unwrap();
        let summary = summarize(&series);
        assert!(summary.starts_with("Bismarck Stage: 3 points (1 gaps)"));
        assert!(summary.contains("range: 2024-01-01 .. 2024-01-03"));
        assert!(summary.contains("last reading: 2.25 at 2024-01-02"));
    }

    #[test]
    fn empty_series_has_no_range() {
        let series = TimeSeries::from_json(
            r#"{"location":"Mott","dataset":"Rain","times":[],"values":[]}"#,
        )
        .unwrap();
        assert_eq!(summarize(&series), "Mott Rain: 0 points (0 gaps)");
    }
}
