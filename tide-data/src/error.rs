/// Error types for the tide data pipeline
use thiserror::Error;

/// Text shown to the user when a station's readings cannot be fetched or parsed.
pub const READING_ERROR_MESSAGE: &str = "Error fetching data.";

/// Failure to retrieve a resource from a [`crate::source::DataSource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The resource answered with a non-success status
    #[error("bad response status {code}: {reason}")]
    Status { code: u16, reason: String },

    /// The request never produced a response (network, I/O, browser fetch rejection)
    #[error("transport error: {0}")]
    Transport(String),
}

/// Main error type for catalog and reading operations
#[derive(Error, Debug)]
pub enum TideError {
    /// Station list could not be retrieved
    #[error("Failed to load station catalog: {0}")]
    CatalogLoad(FetchError),

    /// Station list payload was not a sequence of station records
    #[error("Failed to parse station catalog: {0}")]
    CatalogParse(#[source] serde_json::Error),

    /// Per-station readings could not be retrieved
    #[error("Failed to fetch readings: {0}")]
    ReadingFetch(FetchError),

    /// Per-station readings payload was malformed
    #[error("Failed to parse readings: {0}")]
    ReadingParse(#[source] serde_json::Error),

    /// Query rejected before any request was made
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl TideError {
    /// Message to put in the status region, if this error is surfaced to the user at all.
    ///
    /// Catalog failures only leave the station selector empty.
    pub fn user_message(&self) -> Option<String> {
        match self {
            TideError::CatalogLoad(_) | TideError::CatalogParse(_) => None,
            TideError::ReadingFetch(_) | TideError::ReadingParse(_) => {
                Some(READING_ERROR_MESSAGE.to_string())
            }
            TideError::InvalidQuery(reason) => Some(reason.clone()),
        }
    }
}

/// Type alias for Results using TideError
pub type Result<T> = std::result::Result<T, TideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_are_silent() {
        let err = TideError::CatalogLoad(FetchError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        });
        assert_eq!(err.user_message(), None);
        assert_eq!(
            err.to_string(),
            "Failed to load station catalog: bad response status 500: Internal Server Error"
        );
    }

    #[test]
    fn test_reading_errors_use_generic_message() {
        let err = TideError::ReadingFetch(FetchError::Transport("connection reset".to_string()));
        assert_eq!(err.user_message().as_deref(), Some("Error fetching data."));

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TideError::ReadingParse(parse);
        assert_eq!(err.user_message().as_deref(), Some("Error fetching data."));
    }

    #[test]
    fn test_invalid_query_surfaces_reason() {
        let err = TideError::InvalidQuery("Please select a station.".to_string());
        assert_eq!(err.user_message().as_deref(), Some("Please select a station."));
    }
}
