//! Station Map
//!
//! Mapbox map of the fixed monitoring stations (river gauges, dams and
//! mesonet weather stations). Clicking a marker opens that station's modal
//! below the map, with its graphs grouped into category tabs.
//!
//! Data flow:
//! 1. The station registry is embedded in the binary (`fixtures/stations.csv`).
//! 2. On mount, the page's `stationMapConfig`, `baseGraphUrl`, `graphMap` and
//!    legacy `<Station>URLS` globals are read into `AppState`.
//! 3. Once `mapboxgl` is available the map is created (or `window.map`
//!    reused) and one colored marker is placed per station.
//! 4. Marker clicks are sent to a coroutine that opens the modal, scrolls to
//!    it and, when a live dataset is configured, loads its chart.

use dioxus::prelude::*;
use futures::StreamExt;
use rsm_graphs::ModalBoard;
use rsm_map_ui::components::{ErrorDisplay, MapContainer, MapHeader, StationModal};
use rsm_map_ui::js_bridge;
use rsm_map_ui::live;
use rsm_map_ui::state::AppState;
use rsm_stations::StationRegistry;

/// Checks of `window.mapboxgl` (100ms apart) before giving up.
const MAPBOX_WAIT_ATTEMPTS: u32 = 50;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("station-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Marker clicks arrive here as registry indices.
    let opener = use_coroutine(move |mut rx: UnboundedReceiver<usize>| async move {
        while let Some(index) = rx.next().await {
            open_station(state, index);
        }
    });

    // Load registry, page config and graph sources on mount
    use_effect(move || {
        let registry = match StationRegistry::builtin() {
            Ok(registry) => registry,
            Err(e) => {
                log::error!("Failed to load stations: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load stations: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        log::info!("Loaded {} stations", registry.len());

        let config = js_bridge::read_map_config();
        let sources = js_bridge::read_graph_sources(&registry);
        if sources.is_empty() {
            log::warn!("No graph URLs found on page");
        }

        state.modals.set(ModalBoard::for_registry(&registry));
        state.sources.set(sources);
        state.config.set(config);
        state.registry.set(registry);
    });

    // Build the map once the registry is in place
    use_effect(move || {
        let registry = state.registry.read().clone();
        if registry.is_empty() {
            return;
        }
        let config = state.config.peek().clone();
        let tx = opener.tx();

        spawn(async move {
            if !js_bridge::wait_for_global("mapboxgl", MAPBOX_WAIT_ATTEMPTS).await {
                state
                    .error_msg
                    .set(Some("Mapbox GL did not load".to_string()));
                state.loading.set(false);
                return;
            }

            let map = match js_bridge::init_map(&config) {
                Ok(map) => map,
                Err(e) => {
                    log::error!("Map initialization failed: {:#}", e);
                    state
                        .error_msg
                        .set(Some(format!("Map initialization failed: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            for (index, station) in registry.iter().enumerate() {
                let tx = tx.clone();
                let name = station.name.clone();
                let added = js_bridge::add_station_marker(&map, index, station, move || {
                    log::debug!("Marker clicked: {}", name);
                    let _ = tx.unbounded_send(index);
                });
                if let Err(e) = added {
                    log::warn!("Skipping marker for {}: {:#}", station.name, e);
                }
            }
            state.loading.set(false);
        });
    });

    let config = state.config.read().clone();
    let stations: Vec<_> = state.registry.read().iter().cloned().collect();
    let station_count = stations.len();
    let modals = stations.into_iter().map(|station| {
        let key = station.name.clone();
        rsx! {
            StationModal { key: "{key}", station }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            MapHeader {
                title: "Monitoring Stations".to_string(),
                station_count,
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            MapContainer {
                id: config.map_container_id.clone(),
                loading: (state.loading)(),
                height: 600,
            }

            {modals}
        }
    }
}

/// Open the clicked station's modal, scroll to it and start the live chart.
fn open_station(mut state: AppState, index: usize) {
    let Some(station) = state.registry.peek().get(index).cloned() else {
        log::warn!("Click for unknown station index {}", index);
        return;
    };
    if state.modals.write().open(&station.name).is_none() {
        return;
    }

    let config = state.config.peek().clone();
    js_bridge::scroll_below_map(&config.map_container_id);
    if let Some(dataset) = config.live_dataset() {
        live::spawn_graph_update(
            config.timeseries_endpoint.clone(),
            station.name.clone(),
            dataset.to_string(),
            station.modal_id(),
        );
    }
}
