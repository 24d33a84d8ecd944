//! Bounded single-hop HTTP fetch and header extraction.
//!
//! Each hop is one `HEAD` request through a client with redirects disabled, so
//! the resolver sees every 3xx response itself.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::config::CAPTURED_HEADERS;
use crate::error_handling::{fetch_error_from_reqwest, FetchError};

/// Response metadata of one hop.
#[derive(Debug, Clone)]
pub struct HopResponse {
    pub status: u16,
    pub status_text: String,
    /// Allow-listed headers, lower-case names
    pub headers: BTreeMap<String, String>,
    pub elapsed: Duration,
}

impl HopResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get("location").map(String::as_str)
    }
}

/// Extracts the allow-listed headers from an HTTP response.
///
/// Header names are matched case-insensitively (`HeaderMap` stores them lower-case)
/// and recorded lower-case. Values that are not valid visible ASCII are decoded lossily.
pub fn extract_captured_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    CAPTURED_HEADERS
        .iter()
        .filter_map(|&name| {
            headers.get(name).map(|value| {
                let value = value
                    .to_str()
                    .map(str::to_string)
                    .unwrap_or_else(|_| String::from_utf8_lossy(value.as_bytes()).into_owned());
                (name.to_string(), value)
            })
        })
        .collect()
}

/// Issues one `HEAD` request for a hop.
///
/// The request races both the per-hop `timeout` and `cancel`. The timer lives
/// inside the returned future, so it is torn down on every exit path.
/// A 3xx without `Location` is returned as-is; judging it is the resolver's job.
///
/// # Errors
///
/// * `FetchError::Timeout` - `timeout` elapsed (or reqwest's own timeout fired)
/// * `FetchError::Network` - any transport failure, with its message
/// * `FetchError::Cancelled` - `cancel` fired first
pub async fn fetch_hop(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<HopResponse, FetchError> {
    let start = Instant::now();
    let request = client.head(url).send();

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(FetchError::Cancelled),
        result = tokio::time::timeout(timeout, request) => result,
    };

    let response = match result {
        Err(_elapsed) => return Err(FetchError::Timeout),
        Ok(Err(e)) => return Err(fetch_error_from_reqwest(&e)),
        Ok(Ok(response)) => response,
    };

    let status = response.status();
    Ok(HopResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        headers: extract_captured_headers(response.headers()),
        elapsed: start.elapsed(),
    })
}
