//! Frame source resolution for stored graph entries.

use once_cell::sync::Lazy;
use regex::Regex;

static ABSOLUTE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(https?:)?//").unwrap());
static GRAPHS_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)graphs/").unwrap());

/// Resolve a stored graph entry into the URL an embedded frame should load.
///
/// Absolute, protocol-relative and site-rooted URLs pass through. Paths with
/// a `graphs/` segment are moved under `base` (keeping what follows the last
/// `graphs/`) unless they already start with it. Bare file names get `base`
/// prepended.
pub fn resolve_url(raw: &str, base: Option<&str>) -> String {
    if raw.is_empty() || ABSOLUTE_URL.is_match(raw) || raw.starts_with('/') {
        return raw.to_string();
    }
    let base = base.unwrap_or("");
    if GRAPHS_SEGMENT.is_match(raw) {
        if !base.is_empty() && !raw.starts_with(base) {
            let file = GRAPHS_SEGMENT.split(raw).last().unwrap_or(raw);
            return format!("{}{}", base, file);
        }
        return raw.to_string();
    }
    format!("{}{}", base, raw)
}
