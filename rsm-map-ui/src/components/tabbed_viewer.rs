//! Tabbed graph viewer shown inside an open station modal.
//!
//! One button per category, a Chart/Table sub-view row, and a single frame
//! whose source follows the selection. The selection lives in a `TabState`
//! owned by this component, so remounting the viewer resets it.

use dioxus::prelude::*;
use rsm_graphs::{group_urls_by_type, TabState, ViewKind};

/// Shown when none of the station's URLs could be categorized.
pub const NO_GRAPHS_MESSAGE: &str = "No graphs available for this location.";

#[derive(Props, Clone, PartialEq)]
pub struct TabbedViewerProps {
    /// Raw graph URLs for the station
    pub urls: Vec<String>,
    /// Known station names, stripped from table titles
    pub known_stations: Vec<String>,
    /// Prefix for relative graph paths; empty when unset
    #[props(default)]
    pub base_url: String,
}

#[component]
pub fn TabbedViewer(props: TabbedViewerProps) -> Element {
    let urls = props.urls.clone();
    let known = props.known_stations.clone();
    let mut tabs = use_signal(move || {
        let names: Vec<&str> = known.iter().map(String::as_str).collect();
        TabState::new(group_urls_by_type(&urls, &names))
    });

    let Some(state) = tabs.read().clone() else {
        return rsx! {
            p { "{NO_GRAPHS_MESSAGE}" }
        };
    };
    let base_url = Some(props.base_url.as_str()).filter(|b| !b.is_empty());
    let view = state.view(base_url);
    let view_row_style = if view.view_row_visible { "" } else { "display: none;" };

    let category_buttons = state.tabs().iter().map(|tab| {
        let key = tab.key.clone();
        let class = if tab.key == view.active_category { "active" } else { "" };
        rsx! {
            button {
                key: "{tab.key}",
                r#type: "button",
                class: "{class}",
                title: "{tab.key}",
                onclick: move |_| {
                    if let Some(state) = tabs.write().as_mut() {
                        state.select_category(&key);
                    }
                },
                "{tab.label}"
            }
        }
    });

    let view_buttons = ViewKind::ALL.into_iter().map(|kind| {
        let class = if view.is_active(kind) { "active" } else { "" };
        let style = if view.is_visible(kind) { "" } else { "display: none;" };
        rsx! {
            button {
                key: "{kind}",
                r#type: "button",
                class: "{class}",
                style: "{style}",
                onclick: move |_| {
                    if let Some(state) = tabs.write().as_mut() {
                        state.select_view(kind);
                    }
                },
                "{kind}"
            }
        }
    });

    rsx! {
        div {
            class: "tabs",
            div {
                class: "tab-row",
                role: "tablist",
                {category_buttons}
            }
            div {
                class: "subtab-row",
                style: "{view_row_style}",
                {view_buttons}
            }
            div {
                class: "tab-panels",
                iframe {
                    class: "graph",
                    src: "{view.frame_src}",
                    style: "width: 100%; height: 70vh; border: 0;",
                }
            }
        }
    }
}
