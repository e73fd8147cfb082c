//! River monitoring stations shown on the interactive map.
//!
//! The station list is fixed: it is embedded from `fixtures/stations.csv`
//! at compile time and parsed once into an ordered [`StationRegistry`].
//! A station's position in that list decides its [`StationCategory`].

pub mod registry;
pub mod station;

pub use registry::StationRegistry;
pub use station::{Station, StationCategory};
