//! Where station lists and readings come from.
//!
//! A data set is a directory (or URL prefix) holding `stations.json` plus
//! one `<station_id>.json` per station. [`DataLayout`] names those
//! resources; [`DataSource`] implementations retrieve them.

use crate::error::FetchError;

// tokio is a dev-dependency, so the directory source is always built for tests.
#[cfg(any(feature = "fs", test))]
mod dir;
#[cfg(feature = "api")]
mod http;

#[cfg(any(feature = "fs", test))]
pub use dir::DirSource;
#[cfg(feature = "api")]
pub use http::HttpSource;

/// File name of the station list within a data set.
pub const CATALOG_FILE: &str = "stations.json";

/// Retrieves raw JSON payloads for the pipeline.
///
/// Futures are not required to be `Send` so that browser `fetch` can
/// implement this on the single-threaded WASM runtime.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Fetch the `stations.json` payload.
    async fn fetch_catalog(&self) -> Result<String, FetchError>;

    /// Fetch the readings payload for one station.
    async fn fetch_readings(&self, station_id: &str) -> Result<String, FetchError>;
}

/// Paths of the resources in a data set, relative to a base location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    base: String,
}

impl DataLayout {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn catalog_path(&self) -> String {
        self.join(CATALOG_FILE)
    }

    pub fn readings_path(&self, station_id: &str) -> String {
        self.join(&readings_file_name(station_id))
    }

    fn join(&self, name: &str) -> String {
        if self.base.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.base, name)
        }
    }
}

/// File name holding one station's readings.
pub fn readings_file_name(station_id: &str) -> String {
    format!("{}.json", station_id)
}
