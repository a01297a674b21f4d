//! The two pipeline stages: catalog load and reading query.
//!
//! Neither stage retries. A failure is returned to the caller, which decides
//! what (if anything) to show.

use crate::catalog::StationCatalog;
use crate::error::{Result, TideError};
use crate::query::{QueryOutcome, ReadingQuery};
use crate::reading::parse_readings;
use crate::series::ReadingSeries;
use crate::source::DataSource;
use log::{debug, error, info};

/// Fetch and build the station catalog.
pub async fn load_catalog<S: DataSource>(source: &S) -> Result<StationCatalog> {
    let body = source.fetch_catalog().await.map_err(|e| {
        error!("Failed to load stations.json: {}", e);
        TideError::CatalogLoad(e)
    })?;
    let catalog = StationCatalog::parse(&body).inspect_err(|e| error!("{}", e))?;
    info!(
        "Loaded {} stations (from {} total).",
        catalog.len(),
        catalog.source_total()
    );
    Ok(catalog)
}

/// Fetch one station's readings and cut them down to the query window.
///
/// `catalog` is only used to resolve the chart label; an empty catalog
/// (still loading, or failed to load) yields the raw station id.
pub async fn query_readings<S: DataSource>(
    source: &S,
    catalog: &StationCatalog,
    query: &ReadingQuery,
) -> Result<QueryOutcome> {
    let station_id = query.station_id();
    let body = source.fetch_readings(station_id).await.map_err(|e| {
        error!("Failed to fetch readings for {}: {}", station_id, e);
        TideError::ReadingFetch(e)
    })?;
    let readings = parse_readings(&body).inspect_err(|e| error!("{}: {}", station_id, e))?;
    let total = readings.len();
    let selected = query.window().select(readings);
    debug!(
        "{}: {} of {} readings inside {} .. {}",
        station_id,
        selected.len(),
        total,
        query.window().start(),
        query.window().end()
    );

    if selected.is_empty() {
        return Ok(QueryOutcome::Empty);
    }
    let label = catalog.resolve_label(station_id);
    Ok(QueryOutcome::Series(ReadingSeries::new(label, selected)))
}
