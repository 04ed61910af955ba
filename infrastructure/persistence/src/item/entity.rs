use chrono::NaiveDate;
use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::item::value_objects::ItemId;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: NaiveDate,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            ItemId::new(self.id),
            self.name,
            self.category,
            self.brand,
            self.purchase_price,
            self.purchase_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_row_into_domain_item() {
        let entity = ItemEntity {
            id: 3,
            name: "Speedmaster".to_string(),
            category: "Watches".to_string(),
            brand: "OMEGA".to_string(),
            purchase_price: 650_000,
            purchase_date: NaiveDate::from_ymd_opt(2022, 6, 15).unwrap(),
        };

        let item = entity.into_domain();

        assert_eq!(item.id, ItemId::new(3));
        assert_eq!(item.name, "Speedmaster");
        assert_eq!(item.category, "Watches");
        assert_eq!(item.brand, "OMEGA");
        assert_eq!(item.purchase_price, 650_000);
        assert_eq!(
            item.purchase_date,
            NaiveDate::from_ymd_opt(2022, 6, 15).unwrap()
        );
    }
}
