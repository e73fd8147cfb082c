//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::config::MapConfig;
use dioxus::prelude::*;
use rsm_graphs::{GraphSources, ModalBoard};
use rsm_stations::StationRegistry;

/// Shared state for the station map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fixed station list, set once at startup
    pub registry: Signal<StationRegistry>,
    /// Per-station graph URL lists from the page template
    pub sources: Signal<GraphSources>,
    pub config: Signal<MapConfig>,
    /// Which station modal is open
    pub modals: Signal<ModalBoard>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            registry: Signal::new(StationRegistry::default()),
            sources: Signal::new(GraphSources::default()),
            config: Signal::new(MapConfig::default()),
            modals: Signal::new(ModalBoard::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Known station names, in registry order.
    pub fn station_names(&self) -> Vec<String> {
        self.registry
            .read()
            .iter()
            .map(|s| s.name.clone())
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
