//! Chart-ready projection of a station's readings.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON.

use crate::reading::Reading;
use serde::Serialize;

/// One (timestamp, value) point on the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub date_time: String,
    pub value: f64,
}

impl From<Reading> for SeriesPoint {
    fn from(reading: Reading) -> Self {
        Self {
            date_time: reading.date_time,
            value: reading.value,
        }
    }
}

/// Readings for one station over a query window, in fetch order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSeries {
    pub station_label: String,
    pub points: Vec<SeriesPoint>,
}

impl ReadingSeries {
    pub fn new(station_label: impl Into<String>, readings: Vec<Reading>) -> Self {
        Self {
            station_label: station_label.into(),
            points: readings.into_iter().map(SeriesPoint::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::for_station(&self.station_label)
    }
}

/// Line chart options handed to the renderer alongside the points.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub y_axis_label: String,
    /// Tick granularity of the time axis
    pub time_unit: String,
    pub line_color: String,
    /// Curve tension, 0 draws straight segments
    pub tension: f64,
}

impl ChartConfig {
    pub fn for_station(station_label: &str) -> Self {
        Self {
            title: format!("Tide Level (m) at {}", station_label),
            y_axis_label: "Water Level (m)".to_string(),
            time_unit: "hour".to_string(),
            line_color: "blue".to_string(),
            tension: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_preserves_order() {
        let series = ReadingSeries::new(
            "Tide A",
            vec![
                Reading::new("2020-01-01T01:00", 0.4),
                Reading::new("2020-01-01T00:00", 0.2),
            ],
        );
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].date_time, "2020-01-01T01:00");
        assert_eq!(series.points[1].value, 0.2);
    }

    #[test]
    fn test_series_json_shape() {
        let series = ReadingSeries::new("Tide A", vec![Reading::new("2020-01-01T00:00", 1.5)]);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["stationLabel"], "Tide A");
        assert_eq!(json["points"][0]["dateTime"], "2020-01-01T00:00");
        assert_eq!(json["points"][0]["value"], 1.5);
    }

    #[test]
    fn test_chart_config() {
        let series = ReadingSeries::new("Whitby", Vec::new());
        let config = serde_json::to_value(series.chart_config()).unwrap();
        assert_eq!(config["title"], "Tide Level (m) at Whitby");
        assert_eq!(config["yAxisLabel"], "Water Level (m)");
        assert_eq!(config["timeUnit"], "hour");
    }
}
