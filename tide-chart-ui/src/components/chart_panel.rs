//! Status region above the chart container.

use crate::state::{AppState, Status};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Shows the current [`Status`] (loading, no data, error) and hosts the chart.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let state = use_context::<AppState>();
    let chart_style = format!("min-height: {}px; width: 100%;", props.min_height);

    let status = match (state.status)() {
        None => rsx! {},
        Some(Status::Loading) => rsx! {
            p { style: "margin: 8px 0; color: #666;", "Loading data..." }
        },
        Some(Status::Message(message)) => rsx! {
            p { style: "margin: 8px 0; color: #444;", "{message}" }
        },
        Some(Status::Error(message)) => rsx! {
            p {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                "{message}"
            }
        },
    };

    rsx! {
        section {
            div {
                id: "output",
                {status}
            }
            div {
                id: "{props.id}",
                style: "{chart_style}",
            }
        }
    }
}
