pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Fixed client-facing messages. Causes of 5xx errors are logged, never returned.
pub mod messages {
    pub const NOT_FOUND: &str = "Not Found";
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
    pub const SERVICE_UNAVAILABLE: &str = "Service Unavailable";
}

/// Body of every error response.
///
/// ```json
/// { "detail": "Item not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Every variant maps to exactly one status code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(e) => database_status(e),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(error = %e, "JSON extraction error");
                e.body_text()
            }
            AppError::ValidationError(e) => {
                tracing::info!(error = %e, "Validation error");
                validation_detail(&e)
            }
            AppError::Database(e) => {
                if status == StatusCode::SERVICE_UNAVAILABLE {
                    tracing::warn!(error = %e, "Database unavailable");
                    messages::SERVICE_UNAVAILABLE.to_string()
                } else {
                    tracing::error!(error = ?e, "Database error");
                    messages::INTERNAL_ERROR.to_string()
                }
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::info!("Unprocessable entity: {}", msg);
                msg
            }
        };

        error_response(status, detail)
    }
}

/// Lost or unobtainable connections are transient (503); anything else the
/// database reports is a server fault (500).
fn database_status(error: &DbErr) -> StatusCode {
    match error {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Flatten validator errors into `field: message` pairs, ordered by field.
fn validation_detail(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build a `{"detail": ...}` response with the given status.
///
/// ```rust,ignore
/// use axum_helpers::errors::error_response;
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::NOT_FOUND, "Item not found");
/// ```
pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(detail))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use sea_orm::RuntimeErr;
    use serde_json::Value;
    use validator::Validate;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[derive(Validate)]
    struct Named {
        #[validate(length(max = 3, message = "must be at most 3 characters"))]
        name: String,
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let (status, body) = render(AppError::NotFound("Item not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"detail": "Item not found"}));
    }

    #[tokio::test]
    async fn test_validation_errors_are_422_with_field_detail() {
        let errors = Named {
            name: "toolong".into(),
        }
        .validate()
        .unwrap_err();

        let (status, body) = render(AppError::from(errors)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "name: must be at most 3 characters");
    }

    #[tokio::test]
    async fn test_connection_errors_are_503() {
        let err = DbErr::Conn(RuntimeErr::Internal("connection refused".into()));
        let (status, body) = render(AppError::Database(err)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["detail"], messages::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_other_database_errors_are_500_without_leaking_cause() {
        let err = DbErr::Custom("relation \"items\" does not exist".into());
        let (status, body) = render(AppError::Database(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], messages::INTERNAL_ERROR);
    }
}
