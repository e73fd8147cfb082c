//! Map container component with loading state.

use crate::components::LoadingSpinner;
use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Mapbox renders into
    pub id: String,
    /// Whether the map library is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Map height in pixels
    #[props(default = 500)]
    pub height: u32,
}

/// A container div for the Mapbox map with a loading overlay.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); z-index: 1;",
                    LoadingSpinner {}
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
