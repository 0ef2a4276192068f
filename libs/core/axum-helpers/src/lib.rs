//! # Axum Helpers
//!
//! Shared HTTP plumbing for the items service.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with API docs, health/readiness, graceful shutdown
//! - **[`errors`]**: `AppError` rendered as `{"detail": "..."}` JSON bodies
//! - **[`extractors`]**: `ValidatedJson` and `IdPath`, both rejecting with 422
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes)?;
//!
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use errors::{AppError, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};
