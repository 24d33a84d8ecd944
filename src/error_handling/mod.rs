//! Error handling.
//!
//! This module provides:
//! - Error type definitions for startup, hop fetches and the HTTP surface
//! - Categorization of `reqwest` failures into hop errors
//!
//! Errors are split by how far they travel:
//! - **Fetch errors**: recovered inside the resolver and recorded on a hop
//! - **API errors**: rejected input (4xx) or unexpected failures (500)
//! - **Initialization errors**: logger or client setup, fatal at startup

mod categorization;
mod types;

pub use categorization::{categorize_reqwest_error, error_chain_message, fetch_error_from_reqwest};
pub use types::{ApiError, FetchError, FetchErrorKind, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Timeout.to_string(), "Request timeout");
        assert_eq!(FetchError::Cancelled.to_string(), "Request cancelled");
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_fetch_error_kinds_have_labels() {
        for kind in FetchErrorKind::iter() {
            assert!(!kind.as_str().is_empty());
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::MissingUrl.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidUrl.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_messages_match_wire_format() {
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(ApiError::MissingUrl.to_string(), "URL parameter is required");
        assert_eq!(ApiError::InvalidUrl.to_string(), "Invalid URL format");
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).to_string(),
            "Internal server error occurred while analyzing redirects"
        );
    }
}
