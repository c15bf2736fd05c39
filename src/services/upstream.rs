//! Shared upstream request plumbing.
//!
//! All proxied routes relay JSON bodies untouched, so every client funnels
//! through one helper that performs the GET, logs it, and maps upstream
//! failures onto the gateway's error categories.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{Error, Result};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client used by every upstream service.
pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .user_agent(concat!("nasa-explorer/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

/// GET a JSON document from an upstream API.
///
/// Upstream 429 and 403 are surfaced as dedicated errors so the route
/// handler can relay the same status to the client; transport failures
/// map to 503 via `From<reqwest::Error>`.
pub(crate) async fn get_json(client: &Client, url: &str, query: &[(&str, String)]) -> Result<Value> {
    tracing::debug!(%url, "upstream request");

    let response = client.get(url).query(query).send().await?;
    let status = response.status();
    tracing::debug!(%url, %status, "upstream response");

    match status {
        StatusCode::TOO_MANY_REQUESTS => return Err(Error::RateLimited),
        StatusCode::FORBIDDEN => return Err(Error::UpstreamForbidden),
        _ => {}
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Upstream(format!("Upstream error {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| Error::Upstream(format!("Failed to parse upstream response: {}", e)))
}
