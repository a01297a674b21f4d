//! Query validation, date windows and result sequencing.

use crate::error::{Result, TideError};
use crate::reading::{Reading, DATE_FORMAT};
use crate::series::ReadingSeries;
use chrono::NaiveDate;

/// Shown when a query matched no readings.
pub const NO_DATA_MESSAGE: &str = "No tidal data available for that range.";

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl QueryWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(TideError::InvalidQuery(format!(
                "End date {} is before start date {}.",
                end.format(DATE_FORMAT),
                start.format(DATE_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Parse form inputs. An empty `end` means the window is just `start`.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_input_date(start, "start")?;
        match end.trim() {
            "" => Ok(Self::single_day(start)),
            end => Self::new(start, parse_input_date(end, "end")?),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains_date(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// True if the reading's calendar date falls inside the window.
    /// Readings without a parseable date are never inside.
    pub fn contains(&self, reading: &Reading) -> bool {
        reading.date().is_some_and(|day| self.contains_date(day))
    }

    /// Keep the readings inside the window, preserving their order.
    pub fn select(&self, readings: Vec<Reading>) -> Vec<Reading> {
        readings.into_iter().filter(|r| self.contains(r)).collect()
    }
}

fn parse_input_date(input: &str, which: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TideError::InvalidQuery(format!("Please choose a {} date.", which)));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        TideError::InvalidQuery(format!(
            "Invalid {} date '{}', expected YYYY-MM-DD.",
            which, input
        ))
    })
}

/// A validated request for one station's readings over a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingQuery {
    station_id: String,
    window: QueryWindow,
}

impl ReadingQuery {
    /// Validate raw form inputs. Nothing is fetched for a query that fails here.
    pub fn new(station_id: &str, start_date: &str, end_date: &str) -> Result<Self> {
        let station_id = station_id.trim();
        if station_id.is_empty() {
            return Err(TideError::InvalidQuery("Please select a station.".to_string()));
        }
        if station_id.contains(['/', '\\']) || station_id.contains("..") {
            return Err(TideError::InvalidQuery(format!(
                "Invalid station id '{}'.",
                station_id
            )));
        }
        Ok(Self {
            station_id: station_id.to_string(),
            window: QueryWindow::parse(start_date, end_date)?,
        })
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn window(&self) -> QueryWindow {
        self.window
    }
}

/// Result of a reading query that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Series(ReadingSeries),
    /// No readings fell inside the window; nothing should be charted.
    Empty,
}

impl QueryOutcome {
    /// Status text for the outcome, `None` when a chart replaces the status.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            QueryOutcome::Series(_) => None,
            QueryOutcome::Empty => Some(NO_DATA_MESSAGE),
        }
    }
}

/// Identifies one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryToken(u64);

/// Hands out query tokens so only the latest query's result is applied.
///
/// Overlapping queries all run to completion; whoever finishes holding a
/// token that is no longer current drops its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuerySequencer {
    latest: u64,
}

impl QuerySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query; every earlier token becomes stale.
    pub fn issue(&mut self) -> QueryToken {
        self.latest += 1;
        QueryToken(self.latest)
    }

    pub fn is_current(&self, token: QueryToken) -> bool {
        token.0 == self.latest
    }
}
