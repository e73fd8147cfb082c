//! Map header with title and marker color legend.

use dioxus::prelude::*;
use rsm_stations::StationCategory;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    /// Header title
    pub title: String,
    /// Number of stations on the map
    #[props(default = 0)]
    pub station_count: usize,
}

/// Title line plus one swatch per station category.
#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    let legend = StationCategory::ALL.into_iter().map(|category| {
        let swatch = format!(
            "display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 4px; background: {};",
            category.marker_color()
        );
        rsx! {
            span {
                key: "{category}",
                style: "margin-right: 12px; font-size: 12px; color: #666;",
                span { style: "{swatch}" }
                "{category.label()}"
            }
        }
    });

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if props.station_count > 0 {
                p {
                    style: "margin: 0 0 4px 0; font-size: 12px; color: #666;",
                    "{props.station_count} stations"
                }
            }
            div { {legend} }
        }
    }
}
