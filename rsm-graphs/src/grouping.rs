//! Best-effort classification of pre-rendered graph URLs.
//!
//! Graph pages follow a loose naming convention, e.g.
//! `graphs/Elevation at Hazen.html` or `graphs/Hazen Gauge Height Table.html`.
//! [`classify`] infers a measurement category and whether the page is a
//! chart or a table; [`group_urls_by_type`] folds a station's URL list into
//! one [`GraphPair`] per category.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

static GRAPHS_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)graphs/(.+?)\.html").unwrap());
static FILE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([^/]+)\.html$").unwrap());
static TABLE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)table").unwrap());
static TABLE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+Table$").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static BAROMETRIC_TYPO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Baromatric").unwrap());

/// Categories shorter than this fall back to the full title.
const MIN_CATEGORY_LEN: usize = 3;

/// The two ways a category can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Chart,
    Table,
}

impl ViewKind {
    pub const ALL: [ViewKind; 2] = [ViewKind::Chart, ViewKind::Table];

    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::Chart => "Chart",
            ViewKind::Table => "Table",
        }
    }

    pub fn other(&self) -> ViewKind {
        match self {
            ViewKind::Chart => ViewKind::Table,
            ViewKind::Table => ViewKind::Chart,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chart and table URLs for one category. Entries keep the raw URL as it
/// appeared in the source list; resolution happens when a frame is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphPair {
    pub chart: Option<String>,
    pub table: Option<String>,
}

impl GraphPair {
    pub fn get(&self, kind: ViewKind) -> Option<&str> {
        match kind {
            ViewKind::Chart => self.chart.as_deref(),
            ViewKind::Table => self.table.as_deref(),
        }
    }

    pub fn has(&self, kind: ViewKind) -> bool {
        self.get(kind).is_some_and(|url| !url.is_empty())
    }

    fn set(&mut self, kind: ViewKind, url: String) {
        match kind {
            ViewKind::Chart => self.chart = Some(url),
            ViewKind::Table => self.table = Some(url),
        }
    }
}

/// Category key -> chart/table pair, ordered by key.
pub type GraphGroups = BTreeMap<String, GraphPair>;

/// Result of classifying a single graph URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub kind: ViewKind,
}

/// Decode percent-encoded spaces.
pub fn decode_spaces(s: &str) -> String {
    s.replace("%20", " ")
}

/// Pull the page title out of a graph URL, either from a `graphs/<title>.html`
/// segment or a trailing `<title>.html` file name.
pub fn extract_title(path: &str) -> Option<&str> {
    if let Some(caps) = GRAPHS_TITLE.captures(path) {
        return caps.get(1).map(|m| m.as_str());
    }
    FILE_TITLE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn strip_table_suffix(s: &str) -> String {
    TABLE_SUFFIX.replace(s, "").trim().to_string()
}

/// Infer the category and view kind of one graph URL.
///
/// `known_stations` is checked in order when a table title starts with a
/// station name; the first match is stripped. Returns `None` when the URL
/// does not look like a graph page.
pub fn classify(raw: &str, known_stations: &[&str]) -> Option<Classification> {
    let path = decode_spaces(raw);
    let title = extract_title(&path)?;
    let kind = if TABLE_TOKEN.is_match(title) {
        ViewKind::Table
    } else {
        ViewKind::Chart
    };

    let category = if let Some((before, _)) = title.split_once(" at ") {
        before.trim().to_string()
    } else if kind == ViewKind::Table {
        let without_table = strip_table_suffix(title);
        known_stations
            .iter()
            .find(|place| without_table.starts_with(&format!("{} ", place)))
            .map(|place| without_table[place.len()..].trim().to_string())
            .unwrap_or(without_table)
    } else {
        strip_table_suffix(title)
    };

    let category = WHITESPACE_RUN.replace_all(&category, " ");
    let mut category = BAROMETRIC_TYPO
        .replace(&category, "Barometric")
        .trim()
        .to_string();
    if category.chars().count() < MIN_CATEGORY_LEN {
        category = strip_table_suffix(title);
    }

    Some(Classification { category, kind })
}

/// Group a station's graph URLs by inferred category.
///
/// URLs that do not match a title pattern are dropped. When two URLs land in
/// the same category and view, the later one wins.
pub fn group_urls_by_type<S: AsRef<str>>(urls: &[S], known_stations: &[&str]) -> GraphGroups {
    let mut grouped = GraphGroups::new();
    for raw in urls {
        let raw = raw.as_ref();
        match classify(raw, known_stations) {
            Some(Classification { category, kind }) => {
                grouped.entry(category).or_default().set(kind, raw.to_string());
            }
            None => log::debug!("grouping: skipping unrecognized graph url {}", raw),
        }
    }
    grouped
}
