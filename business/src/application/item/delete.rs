use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        if let Err(e) = self.repository.delete(params.id).await {
            let error = ItemError::from_repository(e);
            match &error {
                ItemError::NotFound => self
                    .logger
                    .info(&format!("Item not found for delete: {}", params.id)),
                other => self
                    .logger
                    .error(&format!("Failed to delete item {}: {}", params.id, other)),
            }
            return Err(error);
        }

        self.logger.info(&format!("Item deleted: {}", params.id));
        Ok(())
    }
}
