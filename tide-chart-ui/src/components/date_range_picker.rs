//! Start and end date inputs for the reading query.

use crate::state::AppState;
use dioxus::prelude::*;

/// Binds `AppState::start_date` and `AppState::end_date`.
///
/// The end date is optional. Left blank, the query covers just the start day
/// (midnight to midnight). Filled in, both days are included. The browser
/// keeps the end picker from going before the start date; a typed reversed
/// range is still rejected as an invalid query on submit.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    id: "startDate",
                    r#type: "date",
                    required: true,
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To (optional): "
                input {
                    id: "endDate",
                    r#type: "date",
                    min: "{start}",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
