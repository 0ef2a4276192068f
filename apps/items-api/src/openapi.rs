use utoipa::OpenApi;

/// OpenAPI document served at `/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple Items API",
        description = "CRUD over items backed by PostgreSQL, with Prometheus metrics at /metrics"
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;
