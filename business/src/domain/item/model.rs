use chrono::NaiveDate;

use super::patch::ItemPatch;
use super::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: NaiveDate,
}

impl Item {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ItemId,
        name: String,
        category: String,
        brand: String,
        purchase_price: i64,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            category,
            brand,
            purchase_price,
            purchase_date,
        }
    }

    /// Returns the item with every field present in `patch` replaced.
    /// Fields absent from the patch keep their current value.
    pub fn apply_patch(self, patch: ItemPatch) -> Self {
        Self {
            name: patch.name.unwrap_or(self.name),
            brand: patch.brand.unwrap_or(self.brand),
            purchase_price: patch.purchase_price.unwrap_or(self.purchase_price),
            ..self
        }
    }
}
