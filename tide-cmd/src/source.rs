//! Data set named on the command line: a local directory or an http(s) URL prefix.

use std::time::Duration;
use tide_data::source::{DirSource, HttpSource};
use tide_data::{DataSource, FetchError};

#[derive(Debug, Clone)]
pub enum DataSet {
    Dir(DirSource),
    Http(HttpSource),
}

impl DataSet {
    /// `http://` and `https://` locations are read over HTTP, anything else from disk.
    pub fn open(location: &str) -> anyhow::Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()?;
            Ok(DataSet::Http(HttpSource::new(client, location)))
        } else {
            Ok(DataSet::Dir(DirSource::new(location)))
        }
    }
}

impl DataSource for DataSet {
    async fn fetch_catalog(&self) -> Result<String, FetchError> {
        match self {
            DataSet::Dir(source) => source.fetch_catalog().await,
            DataSet::Http(source) => source.fetch_catalog().await,
        }
    }

    async fn fetch_readings(&self, station_id: &str) -> Result<String, FetchError> {
        match self {
            DataSet::Dir(source) => source.fetch_readings(station_id).await,
            DataSet::Http(source) => source.fetch_readings(station_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{serve, Route};

    #[test]
    fn test_open_picks_source() {
        assert!(matches!(DataSet::open("data").unwrap(), DataSet::Dir(_)));
        match DataSet::open("https://example.org/tides/").unwrap() {
            DataSet::Http(source) => assert_eq!(source.layout().base(), "https://example.org/tides"),
            other => panic!("expected an HTTP source, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_source_reads_data_set() {
        let base = serve(vec![
            Route::ok("/data/stations.json", r#"[{"id": "A", "label": "Tide A"}]"#),
            Route::status("/data/B.json", 500),
        ])
        .await;
        let source = DataSet::open(&format!("{}/data/", base)).unwrap();

        let body = source.fetch_catalog().await.unwrap();
        assert!(body.contains("Tide A"));

        match source.fetch_readings("B").await {
            Err(FetchError::Status { code, reason }) => {
                assert_eq!(code, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("expected a 500 status, got {:?}", other),
        }
        match source.fetch_readings("missing").await {
            Err(FetchError::Status { code, .. }) => assert_eq!(code, 404),
            other => panic!("expected a 404 status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_source_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = DataSet::open(&format!("http://{}", addr)).unwrap();
        assert!(matches!(
            source.fetch_catalog().await,
            Err(FetchError::Transport(_))
        ));
    }
}
