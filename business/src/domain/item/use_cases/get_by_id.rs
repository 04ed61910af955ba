use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct GetItemByIdParams {
    pub id: ItemId,
}

#[async_trait]
pub trait GetItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError>;
}
