//! Graph categorization and viewer state for the station map.
//!
//! Everything here is pure and runs on the native target, so the browser
//! crates only translate this state into DOM and JS calls.
//!
//! - `grouping`: infer a measurement category from pre-rendered graph URLs
//! - `title`: turn a category key or file title into a tab label
//! - `resolve`: map stored graph entries to frame URLs
//! - `tabs`: active category / sub-view selection for one open modal
//! - `modal`: which station modal is open
//! - `sources`: per-station URL lists from the page template
//! - `scan`: build the per-station URL mapping from a graphs directory
//! - `timeseries`: live time-series response and chart figure

pub mod grouping;
pub mod modal;
pub mod resolve;
pub mod scan;
pub mod sources;
pub mod tabs;
pub mod timeseries;
pub mod title;

pub use grouping::{group_urls_by_type, GraphGroups, GraphPair, ViewKind};
pub use modal::ModalBoard;
pub use sources::GraphSources;
pub use tabs::TabState;
