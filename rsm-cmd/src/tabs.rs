//! Inspect the tabs a station's modal would show.

use crate::graph_map::scan_graphs_dir;
use chrono::NaiveDate;
use rsm_graphs::resolve::resolve_url;
use rsm_graphs::scan::{latest_date, DEFAULT_STATIC_PREFIX};
use rsm_graphs::{group_urls_by_type, ViewKind};
use rsm_stations::StationRegistry;

/// One category tab with its resolved frame URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSummary {
    pub key: String,
    pub label: String,
    pub chart: Option<String>,
    pub table: Option<String>,
    /// Newest date stamp among the tab's files
    pub latest: Option<NaiveDate>,
}

/// Group `urls` the way the modal does and resolve each frame URL.
pub fn summarize_tabs<S: AsRef<str>>(
    urls: &[S],
    known_stations: &[&str],
    base_url: Option<&str>,
) -> Vec<TabSummary> {
    let groups = group_urls_by_type(urls, known_stations);
    let Some(state) = rsm_graphs::TabState::new(groups.clone()) else {
        return Vec::new();
    };
    state
        .tabs()
        .iter()
        .map(|tab| {
            let pair = &groups[&tab.key];
            let resolved = |kind: ViewKind| {
                pair.get(kind)
                    .filter(|url| !url.is_empty())
                    .map(|url| resolve_url(url, base_url))
            };
            let latest = ViewKind::ALL
                .into_iter()
                .filter_map(|kind| pair.get(kind))
                .filter_map(|url| latest_date(&url.replace("%20", " ")))
                .max();
            TabSummary {
                key: tab.key.clone(),
                label: tab.label.clone(),
                chart: resolved(ViewKind::Chart),
                table: resolved(ViewKind::Table),
                latest,
            }
        })
        .collect()
}

pub async fn run_tabs(graphs_dir: &str, station: &str, base_url: Option<&str>) -> anyhow::Result<()> {
    let registry = StationRegistry::builtin()?;
    let Some(station) = registry.find(station) else {
        anyhow::bail!("unknown station: {}", station);
    };
    let graph_map = scan_graphs_dir(graphs_dir, DEFAULT_STATIC_PREFIX).await?;
    let urls = graph_map.get(&station.name).cloned().unwrap_or_default();

    let tabs = summarize_tabs(&urls, &registry.names(), base_url);
    if tabs.is_empty() {
        println!("{}: no graphs available", station.name);
        return Ok(());
    }
    println!("{} ({} tabs)", station.name, tabs.len());
    for tab in &tabs {
        let latest = tab
            .latest
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {} [{}] latest: {}", tab.label, tab.key, latest);
        if let Some(chart) = &tab.chart {
            println!("    chart: {}", chart);
        }
        if let Some(table) = &tab.table {
            println!("    table: {}", table);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACES: [&str; 2] = ["Hazen", "Little Eagle"];

    #[test]
    fn pairs_chart_and_table_with_resolved_urls() {
        let urls = [
            "Elevation at Hazen.html",
            "graphs/Hazen Elevation Table.html",
        ];
        let tabs = summarize_tabs(&urls, &PLACES, Some("/media/graphs/"));
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].key, "Elevation");
        assert_eq!(tabs[0].chart.as_deref(), Some("/media/graphs/Elevation at Hazen.html"));
        assert_eq!(tabs[0].table.as_deref(), Some("/media/graphs/Hazen Elevation Table.html"));
        assert_eq!(tabs[0].latest, None);
    }

    #[test]
    fn latest_stamp_comes_from_file_names() {
        let urls = ["/static/graphs/gauge__Hazen__gauge_height__20240101_20240315_interactive.html"];
        let tabs = summarize_tabs(&urls, &PLACES, None);
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].latest, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(tabs[0].table, None);
    }

    #[test]
    fn nothing_recognizable_gives_no_tabs() {
        let urls = ["/static/graphs/readme.txt"];
        assert!(summarize_tabs(&urls, &PLACES, None).is_empty());
    }
}
