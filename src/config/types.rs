//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS,
    REDIRECT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use linkrank::Config;
///
/// let config = Config {
///     max_redirects: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum redirect hops followed before the chain is cut off
    pub max_redirects: usize,

    /// Per-hop timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_redirects: MAX_REDIRECT_HOPS,
            timeout_seconds: REDIRECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl Config {
    /// Per-hop timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Checks that every field is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_redirects == 0 || self.max_redirects > 50 {
            return Err(ConfigValidationError {
                field: "max_redirects",
                message: format!(
                    "must be between 1 and 50 (got {})",
                    self.max_redirects
                ),
            });
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > 120 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!(
                    "must be greater than 0 and at most 120 (got {})",
                    self.timeout_seconds
                ),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Serve the API on the default port
/// linkrank serve
///
/// # One-shot check with a shorter hop limit
/// linkrank --max-redirects 5 check example.com --pretty
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "linkrank",
    version,
    about = "Follows HTTP redirect chains and scores their health and security."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-hop timeout in seconds
    #[arg(long, env = "LINKRANK_TIMEOUT_SECONDS", default_value_t = REDIRECT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// Maximum redirect hops to follow
    #[arg(long, env = "LINKRANK_MAX_REDIRECTS", default_value_t = MAX_REDIRECT_HOPS, global = true)]
    pub max_redirects: usize,

    /// HTTP User-Agent header value
    #[arg(long, env = "LINKRANK_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the redirect checker HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "LINKRANK_BIND", default_value = DEFAULT_BIND_ADDRESS)]
        bind: String,

        /// Port to listen on
        #[arg(long, env = "LINKRANK_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Analyze a single URL and print the report as JSON
    Check {
        /// URL to analyze (https:// is prepended unless it starts with "http")
        url: String,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            max_redirects: cli.max_redirects,
            timeout_seconds: cli.timeout_seconds,
            user_agent: cli.user_agent.clone(),
        }
    }
}
