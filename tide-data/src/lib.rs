//! Core types and data pipeline for tidal gauge stations.
//!
//! The pipeline has two stages:
//! - [`pipeline::load_catalog`] fetches the station list, drops rainfall
//!   gauges and sorts the rest by label into a [`catalog::StationCatalog`].
//! - [`pipeline::query_readings`] fetches one station's readings, keeps the
//!   ones inside the requested [`query::QueryWindow`] and projects them into a
//!   chart-ready [`series::ReadingSeries`].
//!
//! Both stages read through the [`source::DataSource`] seam so the same code
//! runs against a local directory, an HTTP server, or the browser's `fetch`.

pub mod catalog;
pub mod collation;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod reading;
pub mod series;
pub mod source;
pub mod station;

pub use catalog::StationCatalog;
pub use error::{FetchError, Result, TideError};
pub use pipeline::{load_catalog, query_readings};
pub use query::{QueryOutcome, QuerySequencer, QueryToken, QueryWindow, ReadingQuery};
pub use reading::Reading;
pub use series::{ChartConfig, ReadingSeries, SeriesPoint};
pub use source::{DataLayout, DataSource};
pub use station::Station;
