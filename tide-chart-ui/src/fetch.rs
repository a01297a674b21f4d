//! Browser `fetch` as a [`DataSource`].

use tide_data::source::{DataLayout, DataSource};
use tide_data::FetchError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches a data set relative to the page URL (e.g. `data/stations.json`).
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserSource {
    layout: DataLayout,
}

impl BrowserSource {
    pub fn new(base: &str) -> Self {
        Self {
            layout: DataLayout::new(base),
        }
    }

    async fn get(&self, url: String) -> Result<String, FetchError> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Transport("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;
        if !response.ok() {
            return Err(FetchError::Status {
                code: response.status(),
                reason: response.status_text(),
            });
        }
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| FetchError::Transport(format!("{}: body is not text", url)))
    }
}

impl DataSource for BrowserSource {
    async fn fetch_catalog(&self) -> Result<String, FetchError> {
        self.get(self.layout.catalog_path()).await
    }

    async fn fetch_readings(&self, station_id: &str) -> Result<String, FetchError> {
        self.get(self.layout.readings_path(station_id)).await
    }
}

fn js_error(value: JsValue) -> FetchError {
    FetchError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
