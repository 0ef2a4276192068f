use axum::{http::StatusCode, response::Response};

use super::{error_response, messages};

/// Fallback handler for unmatched routes: 404 `{"detail": "Not Found"}`.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, messages::NOT_FOUND)
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, messages::METHOD_NOT_ALLOWED)
}
