//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for redirect probing.
///
/// Redirects are disabled so the resolver sees every 3xx itself. reqwest's own
/// timeout is set slightly above the per-hop timeout; the resolver enforces the
/// exact limit.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_redirect_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.timeout() + Duration::from_secs(1))
        .connect_timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_redirect_client_with_defaults() {
        assert!(init_redirect_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_redirect_client_rejects_invalid_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_redirect_client(&config),
            Err(InitializationError::HttpClientError(_))
        ));
    }
}
