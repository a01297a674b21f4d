use super::{DataLayout, DataSource};
use crate::error::FetchError;
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads a data set from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    layout: DataLayout,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir: PathBuf = dir.into();
        Self {
            layout: DataLayout::new(dir.to_string_lossy()),
        }
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    async fn read(&self, path: String) -> Result<String, FetchError> {
        debug!("Reading {}", path);
        tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::Status {
                code: 404,
                reason: format!("{} not found", path),
            },
            _ => FetchError::Transport(format!("{}: {}", path, e)),
        })
    }
}

impl DataSource for DirSource {
    async fn fetch_catalog(&self) -> Result<String, FetchError> {
        self.read(self.layout.catalog_path()).await
    }

    async fn fetch_readings(&self, station_id: &str) -> Result<String, FetchError> {
        self.read(self.layout.readings_path(station_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/data");

    #[tokio::test]
    async fn test_reads_fixture_catalog() {
        let source = DirSource::new(FIXTURES);
        let body = source.fetch_catalog().await.unwrap();
        assert!(body.contains("\"id\""));
    }

    #[tokio::test]
    async fn test_missing_station_is_404() {
        let source = DirSource::new(FIXTURES);
        match source.fetch_readings("NO_SUCH_STATION").await {
            Err(FetchError::Status { code, .. }) => assert_eq!(code, 404),
            other => panic!("expected 404, got {:?}", other),
        }
    }
}
