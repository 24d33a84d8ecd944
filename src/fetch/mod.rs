//! Redirect chain fetching.
//!
//! - `request`: the bounded single-hop fetcher
//! - `redirects`: the resolver loop that drives it

mod redirects;
mod request;

pub use redirects::{
    resolve_location, resolve_redirect_chain, LOOP_LIMIT_ERROR, MISSING_LOCATION_ERROR,
};
pub use request::{extract_captured_headers, fetch_hop, HopResponse};
