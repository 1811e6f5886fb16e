//! Item Service - create and get operations

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item};
use crate::repository::ItemRepository;

/// Item service orchestrating repository access.
///
/// The repository is injected at construction; cloning the service shares it.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create an item with a freshly generated id and store it.
    ///
    /// Store failures are returned unchanged; nothing is retried.
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let item = Item::new(input);
        self.repository.save(item.clone()).await?;

        tracing::info!(item_id = %item.id, "Item created successfully");
        Ok(item)
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> ItemResult<Item> {
        self.repository.get_by_id(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
