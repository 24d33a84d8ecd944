//! Error categorization.
//!
//! Maps `reqwest` failures onto the hop-level `FetchError` taxonomy.

use std::error::Error as StdError;

use super::types::{FetchError, FetchErrorKind};

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `FetchErrorKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_builder() {
        FetchErrorKind::Builder
    } else if error.is_body() || error.is_decode() {
        FetchErrorKind::Body
    } else if error.is_request() {
        FetchErrorKind::Request
    } else {
        FetchErrorKind::Other
    }
}

/// Converts a `reqwest::Error` into the `FetchError` recorded on a hop.
///
/// Timeouts get the distinguished `Timeout` variant; everything else keeps the
/// full source chain so DNS and TLS failures stay readable.
pub fn fetch_error_from_reqwest(error: &reqwest::Error) -> FetchError {
    let kind = categorize_reqwest_error(error);
    log::debug!("Hop fetch failed ({kind}): {error}");
    match kind {
        FetchErrorKind::Timeout => FetchError::Timeout,
        _ => FetchError::Network(error_chain_message(error)),
    }
}

/// Joins an error and its sources into one line: `outer: inner: root`.
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and reqwest often repeat the inner message verbatim
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
