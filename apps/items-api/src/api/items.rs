use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};
use sea_orm::DatabaseConnection;

/// Items routes over the PostgreSQL repository, to be nested at `/items`
pub fn router(db: DatabaseConnection) -> Router {
    let repository = PgItemRepository::new(db);
    let service = ItemService::new(repository);
    handlers::router(service)
}
