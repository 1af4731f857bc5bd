//! HTTP client creation and configuration utilities

use crate::constants::{API_KEY_HEADER, HTTP_POOL_MAX_IDLE_PER_HOST};
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates the shared HTTP client with the API key attached to every request.
///
/// The header value is marked sensitive so it is redacted from reqwest's
/// debug output. An unusable key is reported without echoing it back.
pub fn create_http_client(api_key: &str, timeout_seconds: u64) -> Result<Client, AppError> {
    let mut token = HeaderValue::from_str(api_key.trim()).map_err(|_| {
        AppError::config_error("Riot API key contains characters not allowed in a header")
    })?;
    token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(API_KEY_HEADER, token);

    let client = Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()?;
    Ok(client)
}
