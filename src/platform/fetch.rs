//! Static asset fetch

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::data::PortfolioData;
use crate::error::LoadError;

/// Fetch and parse the portfolio record. Single attempt, no timeout.
pub async fn fetch_portfolio(url: &str) -> Result<PortfolioData, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("no window".to_string()))?;

    log::info!("Fetching portfolio data from {}", url);
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Fetch(describe(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| LoadError::Fetch("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response.text().map_err(|e| LoadError::Fetch(describe(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Fetch(describe(&e)))?
        .as_string()
        .ok_or_else(|| LoadError::Parse("response body is not text".to_string()))?;

    PortfolioData::from_json(&body)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
