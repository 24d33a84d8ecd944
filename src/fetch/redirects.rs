//! HTTP redirect chain resolution.
//!
//! This module follows redirect chains manually so every hop from the start URL
//! to the final destination is observable and recorded.

use std::time::Duration;

use reqwest::Url;
use tokio_util::sync::CancellationToken;

use super::request::fetch_hop;
use crate::error_handling::FetchError;
use crate::models::{Hop, RedirectChain, Termination};

/// Error recorded on a 3xx hop that carries no `Location` header.
pub const MISSING_LOCATION_ERROR: &str = "Redirect status without Location header";

/// Error recorded on the sentinel hop appended when the hop limit is reached.
pub const LOOP_LIMIT_ERROR: &str = "Maximum redirect limit reached (possible redirect loop)";

/// Resolves the redirect chain for a URL, following redirects up to `max_hops`.
///
/// # Arguments
///
/// * `start_url` - Absolute, already normalized URL to start from
/// * `max_hops` - Maximum number of redirects to follow
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `timeout` - Per-hop timeout
/// * `cancel` - Cancels the resolution between or during hops
///
/// # Returns
///
/// The recorded chain. Per-hop failures (timeouts, network errors, malformed
/// redirects) end the chain and are recorded on the last hop instead of being
/// returned as errors. At most `max_hops` requests are issued; when all of them
/// redirect, a sentinel error hop is appended, so the chain never exceeds
/// `max_hops + 1` hops.
pub async fn resolve_redirect_chain(
    start_url: &str,
    max_hops: usize,
    client: &reqwest::Client,
    timeout: Duration,
    cancel: &CancellationToken,
) -> RedirectChain {
    let mut hops: Vec<Hop> = Vec::new();
    // Serialized the same way as resolved Locations so loop detection compares like with like
    let mut current = Url::parse(start_url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| start_url.to_string());
    let mut redirect_count = 0usize;

    let termination = loop {
        if redirect_count >= max_hops {
            log::warn!(
                "Redirect limit ({}) reached for {}, stopping at {}",
                max_hops,
                start_url,
                current
            );
            hops.push(Hop::failed(current.clone(), LOOP_LIMIT_ERROR));
            break Termination::LoopLimit;
        }

        let response = match fetch_hop(client, &current, timeout, cancel).await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("Hop {} failed for {}: {}", hops.len() + 1, current, e);
                let termination = match e {
                    FetchError::Cancelled => Termination::Cancelled,
                    _ => Termination::Errored,
                };
                hops.push(Hop::failed(current.clone(), e.to_string()));
                break termination;
            }
        };

        let status = response.status;
        let next = response.location().map(|loc| resolve_location(&current, loc));
        let mut hop = Hop::response(
            current.clone(),
            status,
            response.status_text,
            response.headers,
            response.elapsed.as_secs_f64() * 1000.0,
        );

        if !(300..400).contains(&status) {
            // Not a redirect, we've reached the final URL
            hops.push(hop);
            break Termination::Terminated;
        }

        match next {
            Some(Ok(next_url)) => {
                log::debug!("{} {} -> {}", status, current, next_url);
                hops.push(hop);
                current = next_url;
                redirect_count += 1;
            }
            Some(Err(raw)) => {
                log::warn!(
                    "Redirect status {} for {} with invalid Location {:?}",
                    status,
                    current,
                    raw
                );
                hop.error = Some(format!("Invalid redirect Location header: {raw}"));
                hops.push(hop);
                break Termination::Errored;
            }
            None => {
                log::warn!(
                    "Redirect status {} for {} but no Location header",
                    status,
                    current
                );
                hop.error = Some(MISSING_LOCATION_ERROR.to_string());
                hops.push(hop);
                break Termination::Errored;
            }
        }
    };

    RedirectChain { hops, termination }
}

/// Resolves a `Location` value against the URL that returned it.
///
/// Absolute locations are used as-is; relative ones (`/y`, `../z`, `//host/p`)
/// are joined onto `base`. Returns the raw value as the error when it cannot be
/// turned into an http(s) URL.
pub fn resolve_location(base: &str, location: &str) -> Result<String, String> {
    let location = location.trim();
    let resolved = Url::parse(location)
        .or_else(|_| Url::parse(base).and_then(|base| base.join(location)))
        .map_err(|_| location.to_string())?;
    match resolved.scheme() {
        "http" | "https" => Ok(resolved.to_string()),
        _ => Err(location.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_location_relative_path() {
        assert_eq!(
            resolve_location("https://a.com/x", "/y").unwrap(),
            "https://a.com/y"
        );
    }

    #[test]
    fn test_resolve_location_relative_segment() {
        assert_eq!(
            resolve_location("https://a.com/dir/page", "other").unwrap(),
            "https://a.com/dir/other"
        );
        assert_eq!(
            resolve_location("https://a.com/dir/sub/page", "../up").unwrap(),
            "https://a.com/dir/up"
        );
    }

    #[test]
    fn test_resolve_location_protocol_relative() {
        assert_eq!(
            resolve_location("http://a.com/x", "//b.com/z").unwrap(),
            "http://b.com/z"
        );
    }

    #[test]
    fn test_resolve_location_absolute() {
        assert_eq!(
            resolve_location("http://a.com/x", "https://b.com/").unwrap(),
            "https://b.com/"
        );
    }

    #[test]
    fn test_resolve_location_keeps_query() {
        assert_eq!(
            resolve_location("https://a.com/x", "/y?ref=1#top").unwrap(),
            "https://a.com/y?ref=1#top"
        );
    }

    #[test]
    fn test_resolve_location_rejects_non_http_scheme() {
        assert_eq!(
            resolve_location("https://a.com/x", "javascript:alert(1)").unwrap_err(),
            "javascript:alert(1)"
        );
        assert!(resolve_location("https://a.com/x", "mailto:a@b.com").is_err());
    }

    #[test]
    fn test_resolve_location_invalid_host() {
        assert!(resolve_location("https://a.com/x", "http://").is_err());
    }

    #[tokio::test]
    async fn test_zero_hop_limit_yields_sentinel_only() {
        let client = reqwest::Client::new();
        let cancel = CancellationToken::new();
        let chain = resolve_redirect_chain(
            "https://example.com",
            0,
            &client,
            Duration::from_secs(1),
            &cancel,
        )
        .await;
        assert_eq!(chain.termination, Termination::LoopLimit);
        assert_eq!(chain.hops.len(), 1);
        assert_eq!(chain.hops[0].error.as_deref(), Some(LOOP_LIMIT_ERROR));
    }

    #[tokio::test]
    async fn test_cancelled_resolution_records_cancelled_hop() {
        let client = reqwest::Client::new();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let chain = resolve_redirect_chain(
            "https://example.com",
            10,
            &client,
            Duration::from_secs(1),
            &cancel,
        )
        .await;
        assert_eq!(chain.termination, Termination::Cancelled);
        assert_eq!(chain.hops.len(), 1);
        assert_eq!(chain.hops[0].error.as_deref(), Some("Request cancelled"));
        assert!(chain.hops[0].is_error);
    }
}
