//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use axum::http::StatusCode;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A failed hop fetch.
///
/// These never escape the resolver: each one is recorded on the hop that
/// produced it and ends the chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The per-hop timeout elapsed before a response arrived.
    #[error("Request timeout")]
    Timeout,

    /// DNS, connect, TLS or any other transport failure.
    #[error("{0}")]
    Network(String),

    /// The caller cancelled the resolution.
    #[error("Request cancelled")]
    Cancelled,
}

/// Coarse category of a transport failure, used for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    Timeout,
    Connect,
    Redirect,
    Request,
    Body,
    Builder,
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Connect => "connect error",
            FetchErrorKind::Redirect => "redirect error",
            FetchErrorKind::Request => "request error",
            FetchErrorKind::Body => "body error",
            FetchErrorKind::Builder => "request builder error",
            FetchErrorKind::Other => "other error",
        }
    }
}

/// Errors returned by the HTTP surface.
///
/// Input errors map to 4xx and are rejected before any network activity.
/// `Internal` is the catch-all for failures the resolver did not absorb.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Internal server error occurred while analyzing redirects")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingUrl | ApiError::InvalidUrl => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
