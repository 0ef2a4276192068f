use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, ItemInput},
    repository::ItemRepository,
};

/// PostgreSQL-backed item repository
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();

        // INSERT ... RETURNING
        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item> {
        // UPDATE ... WHERE id = $1 RETURNING; no row means no such item
        let model = entity::ActiveModel::replacing(id, input)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ItemError::NotFound(id),
                other => ItemError::Database(other),
            })?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(deleted)
    }
}
