//! Axum middleware recording per-request metrics.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, Response},
    middleware::Next,
};
use metrics::{counter, histogram};
use std::time::Instant;

use crate::{HTTP_REQUESTS_TOTAL, REQUEST_PROCESSING_SECONDS, REQUESTS_TOTAL};

/// Label used for requests that matched no route, so unknown URLs cannot
/// grow the label set without bound.
const UNMATCHED_PATH: &str = "unmatched";

/// Records for every request, whatever the outcome:
/// - `app_requests_total` incremented by exactly one
/// - `request_processing_seconds` observed with the elapsed time
/// - `http_requests_total{method, path, status}`
///
/// Apply it with `Router::layer` on the fully assembled router so the
/// fallback and `/metrics` itself are counted too.
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use observability::middleware::metrics_middleware;
///
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn(metrics_middleware));
/// ```
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = matched_path
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());

    let response = next.run(request).await;

    let elapsed = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(REQUESTS_TOTAL).increment(1);
    histogram!(REQUEST_PROCESSING_SECONDS).record(elapsed);
    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method,
        "path" => path,
        "status" => status
    )
    .increment(1);

    response
}
