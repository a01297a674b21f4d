//! Build a static tide data set from the Environment Agency flood-monitoring API.
//!
//! # API
//!
//! - Station list: `{API_BASE}/id/stations` returns `{"items": [{"notation": ..., "label": ...}, ...]}`
//! - Readings: `{API_BASE}/id/stations/{notation}/readings?startdate=YYYY-MM-DD&enddate=YYYY-MM-DD`
//!   returns `{"items": [{"dateTime": ..., "value": ...}, ...]}`
//!
//! Each station's readings body is stored verbatim (pretty-printed) as
//! `<notation>.json`; the station list is reduced to `[{"id", "label"}]` and
//! stored as `stations.json`.

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tide_data::reading::DATE_FORMAT;
use tide_data::source::{readings_file_name, CATALOG_FILE};

pub const DEFAULT_API_BASE: &str = "https://environment.data.gov.uk/flood-monitoring";

pub const DEFAULT_START_DATE: &str = "2025-08-01";

/// Pause between station requests.
const REQUEST_DELAY_MS: u64 = 250;

#[derive(Debug, Deserialize)]
struct UpstreamStations {
    items: Vec<UpstreamStation>,
}

#[derive(Debug, Deserialize)]
struct UpstreamStation {
    notation: Option<String>,
    /// Usually a string; kept raw because some stations carry several labels
    #[serde(default)]
    label: serde_json::Value,
}

/// One entry of the generated `stations.json`.
#[derive(Debug, Serialize, PartialEq)]
pub struct StationSummary {
    pub id: String,
    pub label: serde_json::Value,
}

pub fn stations_url(api_base: &str) -> String {
    format!("{}/id/stations", api_base.trim_end_matches('/'))
}

pub fn readings_url(api_base: &str, notation: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/id/stations/{}/readings?startdate={}&enddate={}",
        api_base.trim_end_matches('/'),
        notation,
        start.format(DATE_FORMAT),
        end.format(DATE_FORMAT)
    )
}

/// Parse the upstream station list into summaries, skipping stations without a notation.
fn summarize(body: &str) -> anyhow::Result<Vec<StationSummary>> {
    let upstream: UpstreamStations =
        serde_json::from_str(body).context("Failed to parse station list")?;
    Ok(upstream
        .items
        .into_iter()
        .filter_map(|s| {
            s.notation.map(|id| StationSummary {
                id,
                label: s.label,
            })
        })
        .collect())
}

async fn get_text(client: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Fetch one station's readings and write them to `<data_dir>/<notation>.json`.
async fn save_station(
    client: &reqwest::Client,
    data_dir: &Path,
    url: &str,
    notation: &str,
) -> anyhow::Result<()> {
    let body = get_text(client, url).await?;
    let value: serde_json::Value =
        serde_json::from_str(&body).context("response is not JSON")?;
    let path = data_dir.join(readings_file_name(notation));
    tokio::fs::write(&path, serde_json::to_string_pretty(&value)?)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Download every station's readings for `[start_date, end_date]` and the station list.
///
/// A failure for one station is logged and the run moves on; the station
/// still appears in `stations.json`.
pub async fn run_fetch(
    data_dir: &str,
    api_base: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let end_date = end_date.unwrap_or_else(|| Utc::now().date_naive());
    anyhow::ensure!(
        start_date <= end_date,
        "start date {} is after end date {}",
        start_date,
        end_date
    );

    let dir = Path::new(data_dir);
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("Fetching tide stations...");
    let body = get_text(&client, &stations_url(api_base)).await?;
    let stations = summarize(&body)?;
    info!("Found {} stations.", stations.len());

    let mut saved = 0usize;
    for station in &stations {
        let url = readings_url(api_base, &station.id, start_date, end_date);
        info!("Fetching data for station {}...", station.id);
        match save_station(&client, dir, &url, &station.id).await {
            Ok(()) => {
                saved += 1;
                info!("  Saved data for {}", station.id);
            }
            Err(e) => warn!("  Failed to fetch/save {}: {:#}", station.id, e),
        }
        tokio::time::sleep(std::time::Duration::from_millis(REQUEST_DELAY_MS)).await;
    }

    let catalog_path = dir.join(CATALOG_FILE);
    tokio::fs::write(&catalog_path, serde_json::to_string_pretty(&stations)?)
        .await
        .with_context(|| format!("Failed to write {}", catalog_path.display()))?;

    info!(
        "Fetch complete. {} of {} stations saved to {}",
        saved,
        stations.len(),
        data_dir
    );
    Ok(())
}
