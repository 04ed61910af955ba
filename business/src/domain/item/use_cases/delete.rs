use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteItemParams {
    pub id: ItemId,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
}
