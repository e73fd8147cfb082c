//! Command implementations for the station map CLI.
//!
//! Provides subcommands for listing stations, generating the per-station
//! graph map from a graphs directory, inspecting a station's tabs, and
//! fetching live time series from a running backend.

use clap::Subcommand;
use rsm_graphs::scan::DEFAULT_STATIC_PREFIX;
use rsm_graphs::timeseries::DEFAULT_ENDPOINT;

pub mod graph_map;
pub mod stations;
pub mod tabs;
pub mod timeseries;

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in monitoring stations
    Stations,

    /// Scan a graphs directory and emit the station -> graph URLs mapping as JSON
    GraphMap {
        /// Directory holding the generated graph HTML files
        #[arg(short = 'g', long)]
        graphs_dir: String,

        /// URL prefix the files are served under
        #[arg(long, default_value = DEFAULT_STATIC_PREFIX)]
        static_prefix: String,

        /// Write the JSON here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Show the category tabs a station's modal would display
    Tabs {
        /// Directory holding the generated graph HTML files
        #[arg(short = 'g', long)]
        graphs_dir: String,

        /// Station name, e.g. "Little Eagle"
        #[arg(short = 's', long)]
        station: String,

        /// Prefix for relative graph paths
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Fetch one live time series from the backend
    Timeseries {
        /// Backend base URL, e.g. http://localhost:8000
        #[arg(long)]
        server: String,

        /// Endpoint path on the backend
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        #[arg(short = 'l', long)]
        location: String,

        #[arg(short = 'd', long)]
        dataset: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stations => stations::run_stations(),
        Command::GraphMap {
            graphs_dir,
            static_prefix,
            output,
        } => graph_map::run_graph_map(&graphs_dir, &static_prefix, output.as_deref()).await,
        Command::Tabs {
            graphs_dir,
            station,
            base_url,
        } => tabs::run_tabs(&graphs_dir, &station, base_url.as_deref()).await,
        Command::Timeseries {
            server,
            endpoint,
            location,
            dataset,
        } => timeseries::run_timeseries(&server, &endpoint, &location, &dataset).await,
    }
}
