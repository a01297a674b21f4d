use crate::error::{Result, TideError};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

/// Calendar date format used by query inputs and the date part of reading timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single water-level measurement, in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// ISO-8601 timestamp, e.g. `2025-08-01T00:15:00Z`
    pub date_time: String,
    pub value: f64,
}

impl Reading {
    pub fn new(date_time: impl Into<String>, value: f64) -> Self {
        Self {
            date_time: date_time.into(),
            value,
        }
    }

    /// The calendar date written in the timestamp (the part before `T`).
    pub fn date(&self) -> Option<NaiveDate> {
        let day = self
            .date_time
            .split_once('T')
            .map_or(self.date_time.as_str(), |(day, _)| day);
        NaiveDate::parse_from_str(day.trim(), DATE_FORMAT).ok()
    }
}

#[derive(Deserialize)]
struct ReadingsPayload {
    items: Vec<serde_json::Value>,
}

/// Parse a per-station readings payload: `{"items": [{"dateTime": ..., "value": ...}, ...]}`.
///
/// Items that are not readings (missing timestamp, non-numeric value) are
/// skipped; a payload without an `items` array is an error.
pub fn parse_readings(json: &str) -> Result<Vec<Reading>> {
    let payload: ReadingsPayload = serde_json::from_str(json).map_err(TideError::ReadingParse)?;
    let total = payload.items.len();
    let readings: Vec<Reading> = payload
        .items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if readings.len() < total {
        warn!(
            "Skipped {} malformed readings of {}",
            total - readings.len(),
            total
        );
    }
    Ok(readings)
}
