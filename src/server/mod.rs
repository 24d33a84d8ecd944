//! HTTP API for the redirect checker.
//!
//! Provides two endpoints:
//! - `/api/redirect-checker` - resolves and analyzes a redirect chain (GET only)
//! - `/health` - liveness probe

mod handlers;
mod response;
mod types;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::app::shutdown_signal;
use crate::config::{HEALTH_ROUTE, REDIRECT_CHECKER_ROUTE};
use handlers::{health_handler, method_not_allowed, redirect_checker_handler};
pub use types::{AppState, HealthResponse, RedirectQuery};

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            REDIRECT_CHECKER_ROUTE,
            get(redirect_checker_handler).fallback(method_not_allowed),
        )
        .route(HEALTH_ROUTE, get(health_handler))
        .with_state(state)
}

/// Binds `bind:port` and serves until Ctrl-C, SIGTERM or `state.shutdown` is cancelled.
pub async fn serve(bind: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind((bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", bind, port, e))?;
    serve_listener(listener, state).await
}

/// Serves on an already bound listener with graceful shutdown.
pub async fn serve_listener(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    let addr = listener.local_addr()?;
    log::info!("Redirect checker listening on http://{}/", addr);
    log::info!("  - Checker: http://{}{}?url=...", addr, REDIRECT_CHECKER_ROUTE);
    log::info!("  - Health: http://{}{}", addr, HEALTH_ROUTE);

    let shutdown = state.shutdown.clone();
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let state = AppState::new(reqwest::Client::new(), Config::default());

        let err = serve("127.0.0.1", port, state).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to bind server"));
        assert!(msg.contains(&port.to_string()));
    }

    #[tokio::test]
    async fn test_serve_listener_stops_when_shutdown_cancelled() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let state = AppState::new(reqwest::Client::new(), Config::default());
        let shutdown = state.shutdown.clone();

        let server = tokio::spawn(serve_listener(listener, state));
        shutdown.cancel();

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server should stop after cancellation")
            .expect("server task should not panic");
        assert!(result.is_ok());
    }
}
