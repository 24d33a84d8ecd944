//! Redirect checker handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Method;
use axum::Json;

use super::super::types::{AppState, RedirectQuery};
use crate::analysis::RedirectReport;
use crate::error_handling::ApiError;

/// `GET /api/redirect-checker?url=...`
///
/// Only GET is served. axum hands HEAD to GET routes, so it is refused here.
/// Method and input errors are rejected before any network activity. Everything
/// the resolver records, including chains that end in an error hop, is a 200.
pub async fn redirect_checker_handler(
    method: Method,
    State(state): State<AppState>,
    query: Result<Query<RedirectQuery>, QueryRejection>,
) -> Result<Json<RedirectReport>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let Query(query) = query.unwrap_or_else(|rejection| {
        log::debug!("Unreadable query string: {}", rejection);
        Query(RedirectQuery::default())
    });

    let raw_url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(ApiError::MissingUrl)?;

    // Cancelled on shutdown, or when this future is dropped on client disconnect
    let cancel = state.shutdown.child_token();
    let _guard = cancel.clone().drop_guard();

    let report = crate::check_url(raw_url, &state.client, &state.config, &cancel).await?;
    Ok(Json(report))
}

/// Any method other than GET on the checker route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
