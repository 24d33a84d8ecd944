//! Application initialization and resource setup.
//!
//! - HTTP client for redirect probing
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

pub use client::init_redirect_client;
pub use logger::init_logger_with;
