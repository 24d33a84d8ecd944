//! Server HTTP handlers.

mod health;
mod redirect_checker;

pub use health::health_handler;
pub use redirect_checker::{method_not_allowed, redirect_checker_handler};
