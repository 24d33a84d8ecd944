// Shared test helpers: local redirect servers and a running checker API.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;

use linkrank::initialization::init_redirect_client;
use linkrank::server::{router, AppState};
use linkrank::Config;

/// Serves `app` on an ephemeral port and returns its base URL (no trailing slash).
pub async fn spawn_app(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    format!("http://{}", addr)
}

fn moved(status: StatusCode, location: &'static str) -> impl IntoResponse {
    (status, [(header::LOCATION, location)])
}

/// A site with a fixed set of redirect scenarios.
///
/// - `/a` 301 -> `/b` 301 -> `/c` 200
/// - `/x` 302 -> `y` (relative) -> `/y` 200
/// - `/temp` 302 -> `/perm` 301 -> `/c` 200
/// - `/loop` 303 -> `/loop` forever
/// - `/no-location` 302 without `Location`
/// - `/bad-location` 302 with an unparseable `Location`
/// - `/ftp` 302 -> `ftp://` URL
/// - `/slow` 200 after two seconds
/// - `/broken` 500
/// - `/gone` 307 -> `/broken`
/// - `/seven/{n}` 308 chain of `n` hops ending at `/c`
#[allow(dead_code)] // Used by other test files
pub fn redirect_site() -> Router {
    Router::new()
        .route("/a", get(|| async { moved(StatusCode::MOVED_PERMANENTLY, "/b") }))
        .route("/b", get(|| async { moved(StatusCode::MOVED_PERMANENTLY, "/c") }))
        .route("/c", get(|| async { (StatusCode::OK, [(header::CACHE_CONTROL, "max-age=60")], "final") }))
        .route("/x", get(|| async { moved(StatusCode::FOUND, "y") }))
        .route("/y", get(|| async { "relative target" }))
        .route("/temp", get(|| async { moved(StatusCode::FOUND, "/perm") }))
        .route("/perm", get(|| async { moved(StatusCode::MOVED_PERMANENTLY, "/c") }))
        .route("/loop", get(|| async { Redirect::to("/loop") }))
        .route("/no-location", get(|| async { StatusCode::FOUND }))
        .route("/bad-location", get(|| async { moved(StatusCode::FOUND, "http://[::1") }))
        .route("/ftp", get(|| async { moved(StatusCode::FOUND, "ftp://files.example.com/x") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "too late"
            }),
        )
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/gone", get(|| async { Redirect::temporary("/broken") }))
        .route(
            "/seven/{n}",
            get(|axum::extract::Path(n): axum::extract::Path<usize>| async move {
                if n == 0 {
                    Redirect::permanent("/c")
                } else {
                    Redirect::permanent(&format!("/seven/{}", n - 1))
                }
            }),
        )
}

/// Starts the checker API with `config` and returns its base URL.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_checker(config: Config) -> String {
    let client = init_redirect_client(&config).expect("Failed to build client");
    spawn_app(router(AppState::new(client, config))).await
}
