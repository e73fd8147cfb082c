//! Build the per-station graph URL mapping from a directory listing.
//!
//! This is the server-side half of [`crate::sources::GraphSources`]: the
//! page template embeds the JSON produced from [`build_graph_map`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use rsm_stations::StationRegistry;
use std::collections::BTreeMap;

static RANGE_STAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{6,8})_([0-9]{6,8})_interactive").unwrap());
static DAY_STAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{8})_interactive").unwrap());

/// Bytes escaped in a served file name: everything except ASCII
/// alphanumerics and `-._~/!*()'`, the set static file URLs keep as-is.
const FILENAME_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b'\'');

/// Default URL prefix graph files are served under.
pub const DEFAULT_STATIC_PREFIX: &str = "/static/graphs/";

/// Lowercase and drop all whitespace, for loose name matching.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_html(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".html")
}

/// Served URL for a graph file, with the file name percent-encoded.
pub fn graph_url(static_prefix: &str, filename: &str) -> String {
    format!(
        "{}{}",
        static_prefix,
        utf8_percent_encode(filename, FILENAME_ESCAPES)
    )
}

/// Assign graph files to stations.
///
/// A file goes to every station whose normalized name occurs in its
/// normalized file name. Non-HTML files are skipped; each station's list is
/// sorted.
pub fn build_graph_map<'a, I>(
    filenames: I,
    registry: &StationRegistry,
    static_prefix: &str,
) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let places: Vec<(&str, String)> = registry
        .iter()
        .map(|s| (s.name.as_str(), normalize(&s.name)))
        .collect();
    let mut graph_map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for filename in filenames {
        if !is_html(filename) {
            continue;
        }
        let file_norm = normalize(filename);
        for (place, place_norm) in &places {
            if file_norm.contains(place_norm.as_str()) {
                graph_map
                    .entry(place.to_string())
                    .or_default()
                    .push(graph_url(static_prefix, filename));
            }
        }
    }

    for urls in graph_map.values_mut() {
        urls.sort();
    }
    graph_map
}

/// End date stamped into an interactive graph file name, if any.
///
/// Recognizes `<start>_<end>_interactive` (only an 8-digit end is a date)
/// and `<YYYYMMDD>_interactive`.
pub fn latest_date(filename: &str) -> Option<NaiveDate> {
    if let Some(caps) = RANGE_STAMP.captures(filename) {
        let end = caps.get(2)?.as_str();
        if end.len() != 8 {
            return None;
        }
        return NaiveDate::parse_from_str(end, "%Y%m%d").ok();
    }
    let day = DAY_STAMP.captures(filename)?.get(1)?.as_str();
    NaiveDate::parse_from_str(day, "%Y%m%d").ok()
}
