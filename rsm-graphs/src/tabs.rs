//! Selection state of the tabbed viewer inside one open modal.
//!
//! A `TabState` is created when a modal is (re)built for a station and
//! dropped with it; it is never shared between modals.

use crate::grouping::{GraphGroups, GraphPair, ViewKind};
use crate::resolve::resolve_url;
use crate::title::prettify_title;

/// One category button: raw key (tooltip) and display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub key: String,
    pub label: String,
}

/// What the viewer should render for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub active_category: String,
    pub active_view: ViewKind,
    pub chart_visible: bool,
    pub table_visible: bool,
    /// Hidden when the active category offers only one sub-view.
    pub view_row_visible: bool,
    /// Resolved frame URL, empty when nothing is available.
    pub frame_src: String,
}

impl TabView {
    pub fn is_visible(&self, kind: ViewKind) -> bool {
        match kind {
            ViewKind::Chart => self.chart_visible,
            ViewKind::Table => self.table_visible,
        }
    }

    /// Whether the sub-view button for `kind` is highlighted.
    pub fn is_active(&self, kind: ViewKind) -> bool {
        self.active_view == kind && self.is_visible(kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabState {
    groups: GraphGroups,
    tabs: Vec<CategoryTab>,
    active_category: String,
    active_view: ViewKind,
}

impl TabState {
    /// Start on the first category (by key order) and the chart view.
    /// Returns `None` when there is nothing to show.
    pub fn new(groups: GraphGroups) -> Option<Self> {
        let tabs: Vec<CategoryTab> = groups
            .keys()
            .map(|key| {
                let label = prettify_title(key);
                CategoryTab {
                    key: key.clone(),
                    label: if label.is_empty() { key.clone() } else { label },
                }
            })
            .collect();
        let active_category = tabs.first()?.key.clone();
        let mut state = Self {
            groups,
            tabs,
            active_category,
            active_view: ViewKind::Chart,
        };
        state.reconcile();
        Some(state)
    }

    pub fn tabs(&self) -> &[CategoryTab] {
        &self.tabs
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn active_view(&self) -> ViewKind {
        self.active_view
    }

    fn active_pair(&self) -> Option<&GraphPair> {
        self.groups.get(&self.active_category)
    }

    /// Switch to another category. Unknown keys are ignored.
    pub fn select_category(&mut self, key: &str) {
        if !self.groups.contains_key(key) {
            log::warn!("tabs: no category {}", key);
            return;
        }
        self.active_category = key.to_string();
        self.reconcile();
    }

    pub fn select_view(&mut self, kind: ViewKind) {
        self.active_view = kind;
        self.reconcile();
    }

    /// If the selected sub-view has no URL but the other one does, switch.
    fn reconcile(&mut self) {
        let (has_current, has_other) = match self.active_pair() {
            Some(pair) => (pair.has(self.active_view), pair.has(self.active_view.other())),
            None => (false, false),
        };
        if !has_current && has_other {
            self.active_view = self.active_view.other();
        }
    }

    /// Render description for the current selection; graph entries are
    /// resolved against `base`.
    pub fn view(&self, base: Option<&str>) -> TabView {
        let empty = GraphPair::default();
        let pair = self.active_pair().unwrap_or(&empty);
        let chart_visible = pair.has(ViewKind::Chart);
        let table_visible = pair.has(ViewKind::Table);
        let frame_src = pair
            .get(self.active_view)
            .map(|raw| resolve_url(raw, base))
            .unwrap_or_default();
        TabView {
            active_category: self.active_category.clone(),
            active_view: self.active_view,
            chart_visible,
            table_visible,
            view_row_visible: chart_visible == table_visible,
            frame_src,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_urls_by_type;

    const PLACES: [&str; 2] = ["Hazen", "Stanton"];

    fn sample_state() -> TabState {
        let urls = [
            "graphs/Elevation at Hazen.html",
            "graphs/Hazen Elevation Table.html",
            "graphs/Hazen Gauge Height Table.html",
            "graphs/Discharge at Hazen.html",
        ];
        TabState::new(group_urls_by_type(&urls, &PLACES)).unwrap()
    }

    #[test]
    fn empty_groups_have_no_state() {
        assert!(TabState::new(GraphGroups::new()).is_none());
    }

    #[test]
    fn tabs_are_sorted_by_key_and_first_is_active() {
        let state = sample_state();
        let keys: Vec<&str> = state.tabs().iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["Discharge", "Elevation", "Gauge Height"]);
        assert_eq!(state.active_category(), "Discharge");
        assert_eq!(state.active_view(), ViewKind::Chart);
    }

    #[test]
    fn tab_labels_are_prettified() {
        let groups = group_urls_by_type(
            &["/static/graphs/gauge__Hazen__gauge_height__20240101_20240201.html"],
            &PLACES,
        );
        let state = TabState::new(groups).unwrap();
        assert_eq!(state.tabs()[0].label, "Gauge Height — Hazen (Gauge)");
        assert_eq!(state.tabs()[0].key, "gauge__Hazen__gauge_height__20240101_20240201");
    }

    #[test]
    fn table_only_category_switches_view_and_hides_row() {
        let mut state = sample_state();
        state.select_category("Gauge Height");
        assert_eq!(state.active_view(), ViewKind::Table);
        let view = state.view(None);
        assert!(!view.chart_visible);
        assert!(view.table_visible);
        assert!(!view.view_row_visible);
        assert!(view.is_active(ViewKind::Table));
        assert_eq!(view.frame_src, "graphs/Hazen Gauge Height Table.html");
    }

    #[test]
    fn both_views_show_row() {
        let mut state = sample_state();
        state.select_category("Elevation");
        let view = state.view(None);
        assert!(view.view_row_visible);
        assert!(view.is_active(ViewKind::Chart));
        assert!(!view.is_active(ViewKind::Table));

        state.select_view(ViewKind::Table);
        let view = state.view(Some("/static/graphs/"));
        assert_eq!(view.frame_src, "/static/graphs/Hazen Elevation Table.html");
    }

    #[test]
    fn view_choice_switches_back_when_unavailable() {
        let mut state = sample_state();
        state.select_category("Gauge Height");
        assert_eq!(state.active_view(), ViewKind::Table);
        state.select_category("Discharge");
        assert_eq!(state.active_view(), ViewKind::Chart);
    }

    #[test]
    fn selecting_unavailable_view_is_undone() {
        let mut state = sample_state();
        state.select_view(ViewKind::Table);
        assert_eq!(state.active_category(), "Discharge");
        assert_eq!(state.active_view(), ViewKind::Chart);
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut state = sample_state();
        state.select_category("Snowfall");
        assert_eq!(state.active_category(), "Discharge");
    }
}
