//! Typed wrappers around the page's JS libraries and globals.
//!
//! Mapbox GL (`mapboxgl`) and Plotly are loaded by the hosting page as
//! plain globals. This module binds the handful of calls the map needs and
//! reads the per-page globals the template injects (`graphMap`,
//! `<Station>URLS`, `baseGraphUrl`, `stationMapConfig`).

use crate::config::MapConfig;
use anyhow::Context;
use rsm_graphs::sources::{string_items, GraphSources};
use rsm_stations::{Station, StationRegistry};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Polling interval while waiting for a library global to appear.
const POLL_INTERVAL_MS: u32 = 100;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    #[derive(Clone)]
    pub type MapboxMap;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Map")]
    fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method)]
    pub fn resize(this: &MapboxMap);

    #[wasm_bindgen(method)]
    fn on(this: &MapboxMap, event: &str, listener: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Marker)]
    pub type MapboxMarker;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Marker")]
    fn new(options: &JsValue) -> Result<MapboxMarker, JsValue>;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &MapboxMarker, lng_lat: &JsValue) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &MapboxMarker, map: &MapboxMap) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = getElement)]
    fn get_element(this: &MapboxMarker) -> web_sys::HtmlElement;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = react)]
    fn plotly_react(
        root: &web_sys::Element,
        data: &JsValue,
        layout: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Turn a thrown JS value into an error with a readable message.
pub fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(msg) => anyhow::anyhow!(msg),
        None => anyhow::anyhow!("{:?}", value),
    }
}

/// Convert JSON into a plain JS object.
pub fn to_js(value: &Value) -> anyhow::Result<JsValue> {
    js_sys::JSON::parse(&value.to_string()).map_err(js_error)
}

/// A global on `window`, if defined and not null.
pub fn window_global(name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// A global serialized with `JSON.stringify`.
fn global_json(name: &str) -> Option<String> {
    let value = window_global(name)?;
    js_sys::JSON::stringify(&value).ok()?.as_string()
}

/// Wait until `name` is defined on `window`, checking every 100ms.
/// Gives up after `max_attempts` checks.
pub async fn wait_for_global(name: &str, max_attempts: u32) -> bool {
    for _ in 0..max_attempts {
        if window_global(name).is_some() {
            return true;
        }
        gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
    }
    log::warn!("js_bridge: gave up waiting for window.{}", name);
    false
}

/// Read `window.stationMapConfig` and `window.baseGraphUrl`.
pub fn read_map_config() -> MapConfig {
    let config = match global_json("stationMapConfig") {
        Some(json) => MapConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("js_bridge: ignoring invalid stationMapConfig: {}", e);
            MapConfig::default()
        }),
        None => MapConfig::default(),
    };
    let base = window_global("baseGraphUrl").and_then(|v| v.as_string());
    config.with_base_graph_url(base)
}

/// Collect per-station graph URLs: the `graphMap` object when present,
/// plus any legacy `<Station>URLS` arrays.
pub fn read_graph_sources(registry: &StationRegistry) -> GraphSources {
    let mut sources = match global_json("graphMap") {
        Some(json) => GraphSources::from_graph_map_json(&json).unwrap_or_else(|e| {
            log::warn!("Error building graph URLs from graphMap: {}", e);
            GraphSources::default()
        }),
        None => GraphSources::default(),
    };
    for station in registry {
        let var_name = station.legacy_urls_var();
        let Some(json) = global_json(&var_name) else {
            continue;
        };
        let urls = serde_json::from_str::<Value>(&json)
            .map(|v| string_items(&v))
            .unwrap_or_default();
        sources.insert_legacy(var_name, urls);
    }
    sources
}

/// Reuse the page's `window.map` if it made one, otherwise build a map
/// from `config`. The map is resized once it finishes loading.
pub fn init_map(config: &MapConfig) -> anyhow::Result<MapboxMap> {
    let map = match window_global("map") {
        Some(existing) => existing.unchecked_into::<MapboxMap>(),
        None => {
            if let (Some(token), Some(mapboxgl)) = (&config.access_token, window_global("mapboxgl")) {
                js_sys::Reflect::set(
                    &mapboxgl,
                    &JsValue::from_str("accessToken"),
                    &JsValue::from_str(token),
                )
                .map_err(js_error)?;
            }
            let options = to_js(&json!({
                "container": config.map_container_id,
                "style": config.map_style,
                "center": config.center,
                "zoom": config.zoom,
            }))?;
            MapboxMap::new(&options)
                .map_err(js_error)
                .context("creating map")?
        }
    };

    let loaded_map = map.clone();
    let on_load = Closure::<dyn FnMut()>::new(move || loaded_map.resize());
    map.on("load", on_load.as_ref().unchecked_ref());
    on_load.forget();
    Ok(map)
}

/// Place a colored marker for `station` and call `on_click` when it is
/// clicked. Markers live as long as the page.
pub fn add_station_marker<F>(
    map: &MapboxMap,
    index: usize,
    station: &Station,
    on_click: F,
) -> anyhow::Result<MapboxMarker>
where
    F: FnMut() + 'static,
{
    let options = to_js(&json!({ "color": station.category.marker_color() }))?;
    let lng_lat = to_js(&json!(station.lng_lat()))?;
    let marker = MapboxMarker::new(&options)
        .map_err(js_error)
        .with_context(|| format!("creating marker for {}", station.name))?
        .set_lng_lat(&lng_lat)
        .add_to(map);
    log::debug!(
        "Created marker {} coords: {}, {} label: {}",
        index,
        station.longitude,
        station.latitude,
        station.name
    );

    let handler = Closure::<dyn FnMut()>::new(on_click);
    marker
        .get_element()
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(js_error)?;
    handler.forget();
    Ok(marker)
}

/// Smooth-scroll the page to just below the map, where the modals sit.
pub fn scroll_below_map(map_container_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let map_height = window
        .document()
        .and_then(|d| d.get_element_by_id(map_container_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.offset_height())
        .unwrap_or(0);
    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(map_height));
    options.set_left(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Create or update a Plotly chart inside `container`. The returned
/// promise settles once Plotly has drawn.
pub fn react_chart(
    container: &web_sys::Element,
    traces: &Value,
    layout: &Value,
) -> anyhow::Result<js_sys::Promise> {
    let data = to_js(traces)?;
    let layout = to_js(layout)?;
    plotly_react(container, &data, &layout).map_err(js_error)
}
