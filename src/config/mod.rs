//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, scoring weights)
//! - CLI option types and parsing
//! - The library `Config` and its validation

mod constants;
mod types;

pub use constants::*;
pub use types::{Cli, Command, Config, ConfigValidationError, LogFormat, LogLevel};
