//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({"detail": "Internal Server Error"})
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - malformed body, failed validation or invalid path id",
    content_type = "application/json",
    example = json!({"detail": "name: must be at most 128 characters"})
)]
pub struct UnprocessableEntityResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({"detail": "Item not found"})
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable - database unreachable",
    content_type = "application/json",
    example = json!({"detail": "Service Unavailable"})
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
