use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};

/// Repository trait for Item persistence
///
/// Each method is a single operation against the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; the store assigns its id
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// All items in ascending id order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Overwrite both fields of an existing item.
    ///
    /// Fails with [`ItemError::NotFound`] when `id` is absent and never
    /// creates a row.
    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item>;

    /// Delete an item by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ItemResult<bool>;
}

#[derive(Default)]
struct Store {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

/// Process-local repository used for development and handler tests.
///
/// Ids start at 1 and are never reused, like a database sequence.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let item = Item {
            id: store.last_id,
            name: input.name,
            description: input.description,
        };
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.items.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let item = store.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        item.name = input.name;
        item.description = input.description;

        tracing::info!(item_id = id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.items.remove(&id).is_some();

        if removed {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(removed)
    }
}
