use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::item::value_objects::ItemId;
use crate::domain::logger::Logger;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateItemUseCaseImpl {
    fn log_failure(&self, id: ItemId, error: &ItemError) {
        match error {
            ItemError::NotFound => self
                .logger
                .info(&format!("Item not found for update: {}", id)),
            other => self
                .logger
                .error(&format!("Failed to update item {}: {}", id, other)),
        }
    }
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        if let Err(violations) = params.patch.validate() {
            let messages: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            self.logger.warn(&format!(
                "Rejected update for item {}: {}",
                params.id,
                messages.join("; ")
            ));
            return Err(ItemError::Validation(violations));
        }

        let id = params.id;
        let existing = match self.repository.get_by_id(id).await {
            Ok(item) => item,
            Err(e) => {
                let error = ItemError::from_repository(e);
                self.log_failure(id, &error);
                return Err(error);
            }
        };

        let updated = existing.apply_patch(params.patch);

        if let Err(e) = self.repository.save(&updated).await {
            let error = ItemError::from_repository(e);
            self.log_failure(id, &error);
            return Err(error);
        }

        self.logger.info(&format!("Item updated: {}", updated.id));
        Ok(updated)
    }
}
