//! Dropdown selector for choosing a tide station.

use crate::state::AppState;
use dioxus::prelude::*;

/// Text of the inert first entry.
pub const PLACEHOLDER_LABEL: &str = "Select a station…";

/// Station dropdown selector.
/// Reads the catalog from AppState and updates selected_station on change.
/// Until the catalog loads (or if it fails to) only the placeholder is listed.
#[component]
pub fn StationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options: Vec<(String, String)> = state
        .catalog
        .read()
        .iter()
        .map(|s| (s.id.clone(), s.display_name().to_string()))
        .collect();
    let selected = (state.selected_station)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_station.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "station-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Station: "
            }
            select {
                id: "station-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "{PLACEHOLDER_LABEL}"
                }
                for (id, name) in options.iter() {
                    option {
                        key: "{id}",
                        value: "{id}",
                        selected: *id == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
