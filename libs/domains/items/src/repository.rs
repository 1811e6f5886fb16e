use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// Implementations own the canonical copy of every item and hand out clones.
/// The in-memory store is the only implementation today; the trait does not
/// assume it, so persistent backends can return `ItemError::Store`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert the item, overwriting any entry with the same id
    async fn save(&self, item: Item) -> ItemResult<()>;

    /// Get an item by ID, failing with `ItemError::NotFound` if absent
    async fn get_by_id(&self, id: &str) -> ItemResult<Item>;
}
