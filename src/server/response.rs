//! JSON error responses.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error_handling::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Internal(source) => {
                log::error!("Redirect check failed: {:#}", source);
                json!({ "success": false, "error": self.to_string() })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[tokio::test]
    async fn test_input_errors_carry_only_error_field() {
        let response = ApiError::MissingUrl.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "URL parameter is required" }));
    }

    #[tokio::test]
    async fn test_internal_error_is_generic_500() {
        let response = ApiError::Internal(anyhow::anyhow!("task panicked")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Internal server error occurred while analyzing redirects"
        );
    }
}
