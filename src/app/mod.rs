//! Main application modules.
//!
//! This module provides target URL validation and shutdown handling used by
//! the server and the CLI.

pub mod shutdown;
pub mod url;

pub use shutdown::shutdown_signal;
pub use url::normalize_target_url;
