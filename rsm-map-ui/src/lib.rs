//! Shared Dioxus components and Mapbox/Plotly bridge for the station map.
//!
//! This crate provides:
//! - `js_bridge`: Rust bindings for Mapbox GL markers, Plotly, and page globals
//! - `config`: page-level `MapConfig`
//! - `live`: live time-series fetch and chart update
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (modal, tabbed viewer, map container, etc.)

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod live;
pub mod state;
