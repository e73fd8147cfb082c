//! Display labels for graph categories and file titles.

use crate::grouping::decode_spaces;
use once_cell::sync::Lazy;
use regex::Regex;

static INTERACTIVE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[_\-]?interactive$").unwrap());
static INTERACTIVE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[_\-]?interactive").unwrap());
static COMPACT_DATE_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_?[0-9]{6,8}(_|-)[0-9]{6,8}$").unwrap());
static ISO_DATE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_?[0-9]{4}-[0-9]{2}-[0-9]{2}(_|-)[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\-]+").unwrap());
static TABLE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?-u:\b)table(?-u:\b)").unwrap());

/// Separator between parts of a double-underscore title.
pub const PART_SEPARATOR: &str = " — ";

/// Lowercase `s`, then uppercase the first character of every
/// whitespace-separated word. Words are rejoined with single spaces.
pub fn capitalize_words(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn spaced(part: &str) -> String {
    SEPARATORS.replace_all(part, " ").trim().to_string()
}

/// Turn a category key or raw graph title into a tab label.
///
/// `gauge__<place>__<metric>__<dates>` becomes `"<Metric> — <Place> (Gauge)"`;
/// other double-underscore titles join their capitalized parts with an em
/// dash; anything else is spaced out, loses a standalone "table" and is
/// capitalized word by word.
pub fn prettify_title(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let s = decode_spaces(raw);
    let s = INTERACTIVE_SUFFIX.replace(&s, "");
    let s = INTERACTIVE_TOKEN.replace(&s, "");
    let s = COMPACT_DATE_RANGE.replace(&s, "");
    let s = ISO_DATE_RANGE.replace(&s, "").into_owned();

    let parts: Vec<&str> = s.split("__").collect();
    if parts.len() >= 3 && parts[0].eq_ignore_ascii_case("gauge") {
        let place = spaced(parts[1]);
        let metric = spaced(parts[2]);
        let mut label = String::new();
        if !metric.is_empty() {
            label.push_str(&capitalize_words(&metric));
            label.push_str(PART_SEPARATOR);
        }
        label.push_str(&capitalize_words(&place));
        label.push_str(" (Gauge)");
        return label;
    }

    if s.contains("__") {
        return parts
            .iter()
            .map(|p| capitalize_words(&spaced(p)))
            .collect::<Vec<_>>()
            .join(PART_SEPARATOR);
    }

    let s = spaced(&s);
    let s = TABLE_WORD.replace(&s, "");
    capitalize_words(s.trim())
}
