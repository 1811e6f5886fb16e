//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Map of items guarded by a single reader/writer lock.
///
/// Writes take the lock exclusively; reads share it. Clones share the same
/// map, so a clone handed to a service observes every write.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    async fn save(&self, item: Item) -> ItemResult<()> {
        let mut items = self.items.write().await;
        items.insert(item.id.clone(), item);

        tracing::debug!(total = items.len(), "Item stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ItemResult<Item> {
        let items = self.items.read().await;
        items
            .get(id)
            .cloned()
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }
}
