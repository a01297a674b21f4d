//! Tide Levels by Gauge Station
//!
//! Single-page app: pick a tide gauge, choose a date (or date range), and
//! view the water level as a line chart.
//!
//! Data flow:
//! 1. `tide-cli fetch --data-dir tide-chart/public/data` builds the static
//!    data set (`stations.json` plus one `<station>.json` per gauge).
//! 2. On mount, `data/stations.json` is fetched and turned into the station
//!    catalog that fills the dropdown. A failed load leaves only the
//!    placeholder entry.
//! 3. On submit, the form inputs are validated, the station's readings are
//!    fetched, cut to the chosen days and rendered with D3.js. Each submit
//!    takes a fresh query token; results for superseded queries are dropped.

use dioxus::prelude::*;
use tide_chart_ui::components::{ChartPanel, DateRangePicker, PageHeader, StationSelector};
use tide_chart_ui::fetch::BrowserSource;
use tide_chart_ui::js_bridge;
use tide_chart_ui::state::{AppState, Status};
use tide_data::{load_catalog, query_readings, QueryOutcome, ReadingQuery};

/// Data set location, relative to the page.
const DATA_BASE: &str = "data";

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "tide-level-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("tide-chart-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load chart scripts and the station catalog once on mount
    use_hook(move || {
        js_bridge::init_charts();
        spawn(async move {
            match load_catalog(&BrowserSource::new(DATA_BASE)).await {
                Ok(catalog) => state.catalog.set(catalog),
                Err(e) => log::warn!("Station selector left empty: {}", e),
            }
        });
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let query = match ReadingQuery::new(
            &state.selected_station.peek(),
            &state.start_date.peek(),
            &state.end_date.peek(),
        ) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("{}", e);
                state.status.set(Status::for_error(&e));
                return;
            }
        };

        let token = state.sequencer.write().issue();
        state.status.set(Some(Status::Loading));

        spawn(async move {
            let catalog = state.catalog.peek().clone();
            let result = query_readings(&BrowserSource::new(DATA_BASE), &catalog, &query).await;

            if !state.sequencer.peek().is_current(token) {
                log::debug!("Dropping superseded result for {}", query.station_id());
                return;
            }

            match result {
                Ok(QueryOutcome::Series(series)) => {
                    js_bridge::render_reading_series(CHART_ID, &series);
                    state.status.set(None);
                }
                Ok(outcome) => {
                    js_bridge::destroy_chart(CHART_ID);
                    state.status.set(Status::for_outcome(&outcome));
                }
                Err(e) => {
                    js_bridge::destroy_chart(CHART_ID);
                    state.status.set(Status::for_error(&e));
                }
            }
        });
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "Tide Levels by Gauge Station".to_string(),
                hint: "Water level in metres. Leave the end date blank to view a single day.".to_string(),
            }

            form {
                onsubmit: on_submit,
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                StationSelector {}
                DateRangePicker {}
                button {
                    r#type: "submit",
                    style: "margin: 8px 0;",
                    "Show tide levels"
                }
            }

            ChartPanel {
                id: CHART_ID.to_string(),
                min_height: 450,
            }
        }
    }
}
