use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::item::value_objects::ItemId;

use super::entity::ItemEntity;

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &str, error: sqlx::Error) -> RepositoryError {
    tracing::error!(operation, error = %error, "item query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, name, category, brand, purchase_price, purchase_date FROM items WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE items SET
                name = $1,
                brand = $2,
                purchase_price = $3
            WHERE id = $4"#,
        )
        .bind(&item.name)
        .bind(&item.brand)
        .bind(item.purchase_price)
        .bind(item.id.value())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("save", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
