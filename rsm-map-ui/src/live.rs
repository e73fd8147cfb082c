//! Live time-series charts inside a station modal.
//!
//! A request is fired per call with no cancellation: if two requests for
//! the same modal race, whichever response lands last is what the chart
//! shows. Failures are logged and leave the existing chart alone.

use crate::js_bridge::{self, js_error};
use anyhow::Context;
use rsm_graphs::timeseries::{TimeSeries, TimeSeriesQuery};
use serde_json::{json, Value};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Class of the chart container inside `.modal-content`.
pub const CHART_CLASS: &str = "plotly-graph";

/// Fetch the raw time-series response body from the backend.
pub async fn fetch_body(endpoint: &str, query: &TimeSeriesQuery) -> anyhow::Result<String> {
    let url = query.url_with(endpoint, |s| String::from(js_sys::encode_uri_component(s)));
    let window = web_sys::window().context("no window")?;

    let resp = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_error)
        .with_context(|| format!("fetching {}", url))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("response cast failed"))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}: {}", resp.status(), resp.status_text());
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string().context("response body is not text")
}

/// Decode a response body and hand its traces and layout to `render`.
///
/// `render` is only called once the body has decoded, so a bad response
/// never touches the chart.
pub fn render_body<F, R>(body: &str, render: F) -> anyhow::Result<R>
where
    F: FnOnce(&Value, &Value) -> anyhow::Result<R>,
{
    let series = TimeSeries::from_json(body).context("decoding time series")?;
    let rendered = render(&json!([series.trace()]), &series.layout())?;
    log::info!("live: rendered {} points for {}", series.len(), series.series_name());
    Ok(rendered)
}

/// Find the modal's chart container, creating it at the end of
/// `.modal-content` if the modal has none yet.
pub fn chart_container(modal_id: &str) -> anyhow::Result<web_sys::Element> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document")?;
    let modal = document
        .get_element_by_id(modal_id)
        .with_context(|| format!("modal {} not found", modal_id))?;

    let selector = format!(".{}", CHART_CLASS);
    if let Some(existing) = modal.query_selector(&selector).map_err(js_error)? {
        return Ok(existing);
    }
    let content = modal
        .query_selector(".modal-content")
        .map_err(js_error)?
        .with_context(|| format!("modal {} has no .modal-content", modal_id))?;
    let container = document.create_element("div").map_err(js_error)?;
    container.set_class_name(CHART_CLASS);
    content.append_child(&container).map_err(js_error)?;
    Ok(container)
}

async fn update_graph(endpoint: &str, query: &TimeSeriesQuery, modal_id: &str) -> anyhow::Result<()> {
    let body = fetch_body(endpoint, query).await?;
    let drawn = render_body(&body, |traces, layout| {
        let container = chart_container(modal_id)?;
        js_bridge::react_chart(&container, traces, layout)
    })?;
    JsFuture::from(drawn)
        .await
        .map_err(js_error)
        .with_context(|| format!("Plotly.react failed in {}", modal_id))?;
    Ok(())
}

/// Fetch `dataset` for `location` and render it into the modal's chart.
/// Never fails: errors are logged and the previous chart is kept.
pub async fn fetch_and_update_graph(endpoint: &str, location: &str, dataset: &str, modal_id: &str) {
    let query = TimeSeriesQuery::new(location, dataset);
    if let Err(e) = update_graph(endpoint, &query, modal_id).await {
        log::error!("Graph update failed: {:#}", e);
    }
}

/// Fire-and-forget variant of [`fetch_and_update_graph`].
pub fn spawn_graph_update(endpoint: String, location: String, dataset: String, modal_id: String) {
    wasm_bindgen_futures::spawn_local(async move {
        fetch_and_update_graph(&endpoint, &location, &dataset, &modal_id).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const BODY: &str = r#"{
        "location": "Bismarck",
        "dataset": "Gauge Height",
        "times": ["2024-01-01T00:00:00", "2024-01-01T01:00:00"],
        "values": [10.5, 11.0]
    }"#;

    #[test]
    fn valid_body_renders_once() {
        let calls = Cell::new(0);
        let result = render_body(BODY, |traces, layout| {
            calls.set(calls.get() + 1);
            assert_eq!(traces[0]["mode"], "lines+markers");
            assert_eq!(traces[0]["name"], "Bismarck Gauge Height");
            assert_eq!(layout["xaxis"]["title"], "Time");
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn html_error_page_never_renders() {
        let calls = Cell::new(0);
        let result = render_body("<html>502</html>", |_, _| {
            calls.set(calls.get() + 1);
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn body_missing_values_never_renders() {
        let calls = Cell::new(0);
        let body = r#"{"location": "Mott", "dataset": "Rain", "times": []}"#;
        let result = render_body(body, |_, _| {
            calls.set(calls.get() + 1);
            Ok(())
        });
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("decoding time series"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn render_errors_propagate() {
        let result: anyhow::Result<()> = render_body(BODY, |_, _| anyhow::bail!("no container"));
        assert_eq!(result.unwrap_err().to_string(), "no container");
    }
}
