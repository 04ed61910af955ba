use std::sync::Arc;

use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::domain::item::repository::ItemRepository;
use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;

use crate::api::health::routes::HealthApi;
use crate::api::item::routes::ItemApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let repository: Arc<dyn ItemRepository> = Arc::new(ItemRepositoryPostgres::new(pool));
        Self::with_repository(repository, Arc::new(TracingLogger))
    }

    /// Wires the use cases around any repository implementation.
    pub fn with_repository(repository: Arc<dyn ItemRepository>, logger: Arc<dyn Logger>) -> Self {
        let get_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteItemUseCaseImpl { repository, logger });

        Self {
            health_api: HealthApi,
            item_api: ItemApi::new(get_by_id_use_case, update_use_case, delete_use_case),
        }
    }
}
