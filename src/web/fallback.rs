use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Default 404 Not Found handler.
///
/// # Overview
///
/// This handler is intended to be used as the final fallback
/// in an Axum router.
///
/// Every route in this server answers JSON, so the fallback does too.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
