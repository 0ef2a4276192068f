use axum::{Router, middleware, routing::get};
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use observability::{metrics_handler, metrics_middleware};
use sea_orm::DatabaseConnection;
use std::io;

use crate::openapi::ApiDoc;

pub mod health;
pub mod items;

/// Creates the `/ready` router; its state is the database pool.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}

/// Assembles the full application.
///
/// `items` is mounted at `/items`; docs, fallbacks, `/health`, `/metrics` and
/// `ready` are added around it. The metrics middleware wraps everything,
/// including the fallback and `/metrics` itself, so each request is counted
/// exactly once.
pub fn app(items: Router, ready: Router, app_info: AppInfo) -> io::Result<Router> {
    let api_routes = Router::new().nest("/items", items);

    let router = create_router::<ApiDoc>(api_routes)?
        .merge(health_router(app_info))
        .merge(ready)
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics_middleware));

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use domain_items::{InMemoryItemRepository, ItemService, handlers};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn healthy_db() -> DatabaseConnection {
        let row: BTreeMap<&str, sea_orm::Value> = [("?column?", 1i32.into())].into_iter().collect();
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection()
    }

    fn test_app(db: DatabaseConnection) -> Router {
        let items = handlers::router(ItemService::new(InMemoryItemRepository::new()));
        let info = AppInfo {
            name: "items_api",
            version: "0.1.0",
        };
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            app(items, ready_router(db), info)
        })
        .unwrap()
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_items_are_mounted_under_items() {
        let app = test_app(healthy_db());

        let (status, body) = send(&app, "POST", "/items", Some(json!({"name": "pen", "description": "blue"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({"id": 1, "name": "pen", "description": "blue"}));

        let (status, body) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["name"], "pen");

        let (status, body) = send(&app, "GET", "/items", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body).as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_route_is_detail_404() {
        let app = test_app(healthy_db());

        let (status, body) = send(&app, "GET", "/nothing/here", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_body(&body), json!({"detail": "Not Found"}));
    }

    #[tokio::test]
    async fn test_missing_item_is_item_not_found() {
        let app = test_app(healthy_db());

        let (status, body) = send(&app, "GET", "/items/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_body(&body), json!({"detail": "Item not found"}));
    }

    #[tokio::test]
    async fn test_health_reports_app_info() {
        let app = test_app(healthy_db());

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["status"], "healthy");
        assert_eq!(json_body(&body)["name"], "items_api");
    }

    #[tokio::test]
    async fn test_ready_checks_database() {
        let app = test_app(healthy_db());
        let (status, body) = send(&app, "GET", "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({"status": "ready", "database": "connected"}));

        let down = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();
        let app = test_app(down);
        let (status, body) = send(&app, "GET", "/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(&body)["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_item_paths() {
        let app = test_app(healthy_db());

        let (status, body) = send(&app, "GET", "/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);

        let doc = json_body(&body);
        assert_eq!(doc["info"]["title"], "Simple Items API");
        assert!(doc["paths"]["/items"].is_object());
        assert!(doc["paths"]["/items/{id}"].is_object());
    }

    #[tokio::test]
    async fn test_metrics_endpoint_exposes_request_counter() {
        observability::init_metrics().unwrap();
        let app = test_app(healthy_db());

        send(&app, "GET", "/items", None).await;
        let (status, body) = send(&app, "GET", "/metrics", None).await;
        assert_eq!(status, StatusCode::OK);

        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("app_requests_total"));
        assert!(text.contains("request_processing_seconds"));
    }

    fn requests_total(rendered: &str) -> u64 {
        rendered
            .lines()
            .find_map(|line| line.strip_prefix("app_requests_total "))
            .map(|value| value.trim().parse::<f64>().unwrap() as u64)
            .unwrap_or(0)
    }

    // Runs on a private recorder so concurrent tests cannot move the counter.
    #[test]
    fn test_every_request_is_counted_once() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let app = test_app(healthy_db());
                let before = requests_total(&handle.render());

                let requests: [(&str, &str, Option<Value>, StatusCode); 7] = [
                    ("POST", "/items", Some(json!({"name": "pen"})), StatusCode::OK),
                    ("GET", "/items/99", None, StatusCode::NOT_FOUND),
                    ("GET", "/items/abc", None, StatusCode::UNPROCESSABLE_ENTITY),
                    ("PATCH", "/items/1", None, StatusCode::METHOD_NOT_ALLOWED),
                    ("GET", "/nope", None, StatusCode::NOT_FOUND),
                    ("POST", "/items", Some(json!({"description": "no name"})), StatusCode::UNPROCESSABLE_ENTITY),
                    ("GET", "/metrics", None, StatusCode::OK),
                ];

                for (method, uri, body, expected) in requests {
                    let (status, _) = send(&app, method, uri, body).await;
                    assert_eq!(status, expected, "{method} {uri}");
                }

                let rendered = handle.render();
                assert_eq!(requests_total(&rendered) - before, 7);
                assert!(rendered.contains(r#"path="/items/{id}""#));
                assert!(rendered.contains(r#"path="/items""#));
                assert!(rendered.contains(r#"path="unmatched""#));
            });
        });
    }
}
