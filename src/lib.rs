//! linkrank library: HTTP redirect chain resolution and analysis
//!
//! This library follows a URL's redirect chain one hop at a time (automatic
//! redirects disabled), records every response, and scores the chain for
//! health, performance and security.
//!
//! # Example
//!
//! ```no_run
//! use linkrank::initialization::init_redirect_client;
//! use linkrank::{check_url, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_redirect_client(&config)?;
//!
//! let report = check_url("example.com", &client, &config, &CancellationToken::new()).await?;
//! println!(
//!     "{} -> {} in {} redirects (health {})",
//!     report.start_url, report.analysis.final_url, report.analysis.total_redirects,
//!     report.analysis.health_score
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod server;

// Re-export public API
pub use analysis::{build_report, ChainAnalysis, RedirectReport};
pub use config::{Cli, Command, Config, LogFormat, LogLevel};
pub use error_handling::ApiError;
pub use fetch::resolve_redirect_chain;
pub use models::{Hop, RedirectChain, Termination};

use tokio_util::sync::CancellationToken;

use crate::app::normalize_target_url;

/// Normalizes `raw_url`, resolves its redirect chain and analyzes it.
///
/// Shared by the HTTP handler and the `check` subcommand.
///
/// # Errors
///
/// - `ApiError::InvalidUrl` if the input cannot be turned into an http(s) URL.
///   No request is made in that case.
/// - `ApiError::Internal` if the resolution task panics.
///
/// Per-hop failures are not errors: they are recorded in the report's chain.
pub async fn check_url(
    raw_url: &str,
    client: &reqwest::Client,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<RedirectReport, ApiError> {
    let start_url = normalize_target_url(raw_url)?;
    log::debug!("Checking redirects for {}", start_url);

    let task = {
        let start_url = start_url.clone();
        let client = client.clone();
        let cancel = cancel.clone();
        let max_redirects = config.max_redirects;
        let timeout = config.timeout();
        tokio::spawn(async move {
            resolve_redirect_chain(&start_url, max_redirects, &client, timeout, &cancel).await
        })
    };

    let chain = task.await.map_err(|e| {
        ApiError::Internal(anyhow::Error::new(e).context("redirect resolution task failed"))
    })?;

    Ok(build_report(&start_url, chain))
}
