//! Station listing.

use rsm_stations::{Station, StationRegistry};

/// One line per station: index, name, category, marker color, coordinates.
pub fn station_line(index: usize, station: &Station) -> String {
    format!(
        "{:>2}  {:<22} {:<8} {:<6} {:>11.6} {:>12.6}",
        index,
        station.name,
        station.category.label(),
        station.category.marker_color(),
        station.latitude,
        station.longitude
    )
}

pub fn run_stations() -> anyhow::Result<()> {
    let registry = StationRegistry::builtin()?;
    log::info!("Listing {} stations", registry.len());
    for (index, station) in registry.iter().enumerate() {
        println!("{}", station_line(index, station));
    }
    Ok(())
}
