use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Item;
use super::value_objects::ItemId;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;
    /// Persists the state of an existing item. Fails with `NotFound` when no
    /// stored item has that id.
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
    /// Removes an item. Fails with `NotFound` when nothing was removed.
    async fn delete(&self, id: ItemId) -> Result<(), RepositoryError>;
}
