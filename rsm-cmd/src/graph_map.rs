//! Generate the station -> graph URLs mapping from a graphs directory.

use anyhow::Context;
use rsm_graphs::scan::build_graph_map;
use rsm_stations::StationRegistry;
use std::collections::BTreeMap;

/// File names (not paths) of the regular files in `graphs_dir`.
pub async fn list_graph_files(graphs_dir: &str) -> anyhow::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(graphs_dir)
        .await
        .with_context(|| format!("reading graphs directory {}", graphs_dir))?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::warn!("Skipping non UTF-8 file name {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}

/// Scan `graphs_dir` and build the mapping for the built-in registry.
pub async fn scan_graphs_dir(
    graphs_dir: &str,
    static_prefix: &str,
) -> anyhow::Result<BTreeMap<String, Vec<String>>> {
    let registry = StationRegistry::builtin()?;
    let files = list_graph_files(graphs_dir).await?;
    let graph_map = build_graph_map(files.iter().map(String::as_str), &registry, static_prefix);
    log::info!(
        "Matched {} of {} stations from {} files in {}",
        graph_map.len(),
        registry.len(),
        files.len(),
        graphs_dir
    );
    Ok(graph_map)
}

pub async fn run_graph_map(
    graphs_dir: &str,
    static_prefix: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let graph_map = scan_graphs_dir(graphs_dir, static_prefix).await?;
    let json = serde_json::to_string_pretty(&graph_map)?;
    match output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("writing {}", path))?;
            log::info!("Graph map written to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_graphs_dir(tag: &str, files: &[&str]) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("rsm-graph-map-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested.html")).unwrap();
        for name in files {
            std::fs::write(dir.join(name), "<html></html>").unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn lists_only_regular_files_sorted() {
        let dir = temp_graphs_dir("list", &["b.html", "a.html", "notes.txt"]);
        let names = list_graph_files(dir.to_str().unwrap()).await.unwrap();
        assert_eq!(names, vec!["a.html", "b.html", "notes.txt"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn scans_directory_into_station_map() {
        let dir = temp_graphs_dir(
            "scan",
            &[
                "Elevation at Fort Peck.html",
                "gauge__Bismarck__gauge_height__20240101_20240201_interactive.html",
                "readme.md",
            ],
        );
        let map = scan_graphs_dir(dir.to_str().unwrap(), "/static/graphs/")
            .await
            .unwrap();
        assert_eq!(map["Fort Peck"], vec!["/static/graphs/Elevation%20at%20Fort%20Peck.html"]);
        assert_eq!(map["Bismarck"].len(), 1);
        assert!(!map.contains_key("Hazen"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let err = list_graph_files("/definitely/not/a/graphs/dir").await.unwrap_err();
        assert!(format!("{:#}", err).contains("reading graphs directory"));
    }
}
