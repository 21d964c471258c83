//! Fetches the five indicator tables and builds the dataset.
//!
//! Tables are fetched one after another; the dataset is only built once all
//! five bodies are in, so the charts never see a partial join.

use gapviz_data::{DataError, Dataset, Indicator, IndicatorSources};
use gapviz_views::DashboardConfig;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GET `url` and return the body as text. Non-2xx statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String, DataError> {
    let fail = |reason: String| DataError::Fetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fail("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fail(js_error(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| fail("fetch did not return a Response".to_string()))?;
    if !response.ok() {
        return Err(fail(format!("HTTP {}", response.status())));
    }

    let body = response.text().map_err(|e| fail(js_error(&e)))?;
    let body = JsFuture::from(body).await.map_err(|e| fail(js_error(&e)))?;
    body.as_string()
        .ok_or_else(|| fail("response body is not text".to_string()))
}

/// Fetch every indicator table from `base_url` and join them.
pub async fn load_dataset(base_url: &str, config: &DashboardConfig) -> Result<Dataset, DataError> {
    let mut sources = IndicatorSources::new();
    for indicator in Indicator::ALL {
        let url = table_url(base_url, config.file_for(indicator));
        log::info!("[gapviz] loader: Fetching {} from {}", indicator, url);
        sources.insert(indicator, fetch_text(&url).await?);
    }
    Dataset::load(&sources)
}

fn table_url(base_url: &str, file: &str) -> String {
    if base_url.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), file)
    }
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
