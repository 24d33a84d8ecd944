//! Server data structures.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::config::Config;

/// Shared state for the redirect checker server.
#[derive(Clone)]
pub struct AppState {
    /// Client with automatic redirects disabled
    pub client: reqwest::Client,
    pub config: Config,
    /// Parent of every per-request token; cancelled on shutdown
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(client: reqwest::Client, config: Config) -> Self {
        Self {
            client,
            config,
            shutdown: CancellationToken::new(),
        }
    }
}

/// Query string of `/api/redirect-checker`.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    pub url: Option<String>,
}

/// JSON response for `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
