//! Configuration constants.
//!
//! Defaults for redirect resolution, the HTTP surface and URL validation.

// Redirect handling
/// Maximum number of redirect hops to follow.
/// Reaching it ends the chain with a sentinel hop flagged as a possible loop.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Per-hop request timeout in seconds.
pub const REDIRECT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent with every redirect probe.
pub const DEFAULT_USER_AGENT: &str = "Redirect-Checker/1.0 (+https://linkrank.ai/bot)";

/// Response headers captured on each hop (lower-case).
/// Anything not on this list is dropped before the hop is recorded.
pub const CAPTURED_HEADERS: &[&str] = &[
    "location",
    "cache-control",
    "expires",
    "server",
    "content-type",
];

// URL validation
/// Maximum accepted URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Chain analysis thresholds
/// More redirects than this is reported as an issue.
pub const EXCESSIVE_REDIRECTS: usize = 5;
/// More redirects than this (up to `EXCESSIVE_REDIRECTS`) is reported as a warning.
pub const MULTIPLE_REDIRECTS: usize = 3;

// Scoring weights
pub const HEALTH_PENALTY_PER_REDIRECT: u32 = 5;
pub const HEALTH_PENALTY_PER_ISSUE: u32 = 20;
pub const HEALTH_PENALTY_PER_WARNING: u32 = 10;
pub const HEALTH_PENALTY_PER_ERROR_HOP: u32 = 15;
pub const SECURITY_PENALTY_PER_DOMAIN_CHANGE: u32 = 10;
pub const SECURITY_PENALTY_PER_SUSPICIOUS: u32 = 20;

/// Known URL shortener hosts. Subdomains match too.
pub const URL_SHORTENERS: &[&str] = &["bit.ly", "tinyurl.com", "t.co", "goo.gl", "ow.ly"];

/// Top-level domains with a high abuse rate.
pub const SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf"];

// HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const REDIRECT_CHECKER_ROUTE: &str = "/api/redirect-checker";
pub const HEALTH_ROUTE: &str = "/health";
