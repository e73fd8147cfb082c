//! Per-station modal panel.

use crate::components::TabbedViewer;
use crate::state::AppState;
use dioxus::prelude::*;
use rsm_stations::Station;

#[derive(Props, Clone, PartialEq)]
pub struct StationModalProps {
    pub station: Station,
}

/// Modal for one station. Hidden unless the board says it is open; the
/// tabbed viewer is only mounted while open and is keyed by the board
/// generation so every open starts from the first tab. A live chart, when
/// enabled, is appended to `.modal-content` by `live::chart_container`.
#[component]
pub fn StationModal(props: StationModalProps) -> Element {
    let mut state = use_context::<AppState>();
    let modal_id = props.station.modal_id();

    let (index, open, generation) = {
        let board = state.modals.read();
        let index = board.resolve(&props.station.name);
        (index, board.is_open_id(&modal_id), board.generation())
    };
    let display = if open { "display: block;" } else { "display: none;" };

    let config = state.config.read().clone();
    let urls = state.sources.read().urls_for(&props.station);
    let known_stations = state.station_names();
    let base_url = config.base().unwrap_or_default().to_string();

    rsx! {
        div {
            id: "{modal_id}",
            class: "modal",
            style: "{display}",
            div {
                class: "modal-content",
                span {
                    class: "close",
                    onclick: move |_| {
                        if let Some(index) = index {
                            state.modals.write().close(index);
                        }
                    },
                    "×"
                }
                h3 { "{props.station.name}" }
                if open {
                    TabbedViewer {
                        key: "{generation}",
                        urls,
                        known_stations,
                        base_url,
                    }
                }
            }
        }
    }
}
