use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::patch::ItemPatch;
use crate::domain::item::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemParams {
    pub id: ItemId,
    pub patch: ItemPatch,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
