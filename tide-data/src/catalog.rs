//! The filtered, sorted list of selectable stations.

use crate::collation;
use crate::error::{Result, TideError};
use crate::station::Station;

/// Stations available for selection, rainfall gauges removed and sorted by label.
///
/// A catalog is built once per page load and then only read. An empty
/// catalog (the default) stands in for "not loaded yet"; label lookups
/// against it fall back to the raw station id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationCatalog {
    stations: Vec<Station>,
    source_total: usize,
}

impl StationCatalog {
    /// Build a catalog from raw station records.
    ///
    /// Records whose label contains "rainfall" (any case) are dropped. The
    /// rest are sorted by label ignoring case and accents, with missing
    /// labels sorting as the empty string; equal labels keep their input order.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        let source_total = stations.len();
        let mut kept: Vec<Station> = stations.into_iter().filter(|s| !s.is_rainfall()).collect();
        kept.sort_by_cached_key(|s| collation::base_key(s.label_text()));
        Self {
            stations: kept,
            source_total,
        }
    }

    /// Parse a `stations.json` payload (a JSON array of station records).
    pub fn parse(json: &str) -> Result<Self> {
        let stations: Vec<Station> = serde_json::from_str(json).map_err(TideError::CatalogParse)?;
        Ok(Self::from_stations(stations))
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of records in the payload before rainfall gauges were removed.
    pub fn source_total(&self) -> usize {
        self.source_total
    }

    pub fn find(&self, station_id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == station_id)
    }

    /// Chart title name for `station_id`: the catalog entry's display name, or the raw id.
    pub fn resolve_label(&self, station_id: &str) -> String {
        self.find(station_id)
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| station_id.to_string())
    }
}

impl<'a> IntoIterator for &'a StationCatalog {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}
