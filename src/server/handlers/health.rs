//! Liveness handler.

use axum::Json;

use super::super::types::HealthResponse;

/// Always 200 while the process is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
