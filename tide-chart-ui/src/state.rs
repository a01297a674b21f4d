//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tide_data::{QueryOutcome, QuerySequencer, StationCatalog, TideError};

/// What the status region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// A query is in flight
    Loading,
    /// Informational text, e.g. no readings in range
    Message(String),
    Error(String),
}

impl Status {
    /// Status after a successful query; `None` once a chart is drawn.
    pub fn for_outcome(outcome: &QueryOutcome) -> Option<Status> {
        outcome
            .status_message()
            .map(|message| Status::Message(message.to_string()))
    }

    /// Status after a failed query or catalog load.
    pub fn for_error(err: &TideError) -> Option<Status> {
        err.user_message().map(Status::Error)
    }
}

/// Shared application state for tide chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Station catalog (empty until loaded, and stays empty if loading failed)
    pub catalog: Signal<StationCatalog>,
    /// Currently selected station id ("" for the placeholder)
    pub selected_station: Signal<String>,
    /// Start date, YYYY-MM-DD
    pub start_date: Signal<String>,
    /// End date, YYYY-MM-DD or empty for a single day
    pub end_date: Signal<String>,
    /// Status region contents
    pub status: Signal<Option<Status>>,
    /// Issues a token per submitted query; only the latest result is applied
    pub sequencer: Signal<QuerySequencer>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            catalog: Signal::new(StationCatalog::default()),
            selected_station: Signal::new(String::new()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            status: Signal::new(None),
            sequencer: Signal::new(QuerySequencer::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tide_data::{FetchError, ReadingSeries};

    #[test]
    fn test_status_for_outcome() {
        assert_eq!(
            Status::for_outcome(&QueryOutcome::Empty),
            Some(Status::Message(
                "No tidal data available for that range.".to_string()
            ))
        );
        let series = ReadingSeries::new("A", Vec::new());
        assert_eq!(Status::for_outcome(&QueryOutcome::Series(series)), None);
    }

    #[test]
    fn test_status_for_error() {
        let err = TideError::ReadingFetch(FetchError::Status {
            code: 404,
            reason: "Not Found".to_string(),
        });
        assert_eq!(
            Status::for_error(&err),
            Some(Status::Error("Error fetching data.".to_string()))
        );
        let err = TideError::CatalogLoad(FetchError::Transport("offline".to_string()));
        assert_eq!(Status::for_error(&err), None);
    }
}
