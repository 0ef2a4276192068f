//! Prometheus metrics for the items service.
//!
//! - A process-wide recorder installed once by [`init_metrics`]
//! - [`metrics_handler`] rendering the text exposition format for `/metrics`
//! - [`middleware::metrics_middleware`] counting and timing every request
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{middleware, routing::get, Router};
//! use observability::{init_metrics, metrics_handler, metrics_middleware};
//!
//! init_metrics()?;
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler))
//!     .layer(middleware::from_fn(metrics_middleware));
//! ```

pub mod middleware;

pub use middleware::metrics_middleware;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

/// Unlabeled counter incremented once per handled request.
pub const REQUESTS_TOTAL: &str = "app_requests_total";

/// Per-request processing time in seconds, exported as a summary.
pub const REQUEST_PROCESSING_SECONDS: &str = "request_processing_seconds";

/// Request counter labeled by method, matched route and status.
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder.
///
/// Call once at startup. Later calls return the handle installed by the
/// first one.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        register_metric_descriptions();
        info!("Prometheus metrics recorder initialized");
        Ok(handle)
    })
}

/// Get the metrics handle (None until [`init_metrics`] has run)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for the `/metrics` endpoint
pub async fn metrics_handler() -> Response {
    let body = match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        body,
    )
        .into_response()
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!(REQUESTS_TOTAL, "Total HTTP requests");
    describe_histogram!(
        REQUEST_PROCESSING_SECONDS,
        metrics::Unit::Seconds,
        "Time spent processing request"
    );
    describe_counter!(
        HTTP_REQUESTS_TOTAL,
        "Total HTTP requests by method, route and status"
    );
}
