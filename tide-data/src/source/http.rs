use super::{DataLayout, DataSource};
use crate::error::FetchError;
use log::debug;
use reqwest::Client;

/// Reads a data set published under a URL prefix.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    layout: DataLayout,
}

impl HttpSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            layout: DataLayout::new(base_url),
        }
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    async fn get(&self, url: String) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

impl DataSource for HttpSource {
    async fn fetch_catalog(&self) -> Result<String, FetchError> {
        self.get(self.layout.catalog_path()).await
    }

    async fn fetch_readings(&self, station_id: &str) -> Result<String, FetchError> {
        self.get(self.layout.readings_path(station_id)).await
    }
}
