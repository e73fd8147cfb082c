//! Reusable Dioxus RSX components for the station map.

mod error_display;
mod loading_spinner;
mod map_container;
mod map_header;
mod station_modal;
mod tabbed_viewer;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_header::MapHeader;
pub use station_modal::StationModal;
pub use tabbed_viewer::{TabbedViewer, NO_GRAPHS_MESSAGE};
