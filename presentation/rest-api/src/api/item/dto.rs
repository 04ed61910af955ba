use poem_openapi::Object;
use serde::Deserialize;
use serde::de::Error as _;

use business::domain::item::model::Item;
use business::domain::item::patch::ItemPatch;

/// Partial update of an item. Omitted (or null) fields are left unchanged.
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub purchase_price: Option<i64>,
}

impl UpdateItemRequest {
    /// Decodes a raw request body. The top-level value must be a JSON object.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object"));
        }
        serde_json::from_value(value)
    }
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(request: UpdateItemRequest) -> Self {
        Self {
            name: request.name,
            brand: request.brand,
            purchase_price: request.purchase_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct ItemResponse {
    /// Item identifier
    pub id: i64,
    /// Item name
    pub name: String,
    /// Item category
    pub category: String,
    /// Item brand
    pub brand: String,
    /// Purchase price
    pub purchase_price: i64,
    /// Purchase date (YYYY-MM-DD)
    pub purchase_date: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.value(),
            name: item.name,
            category: item.category,
            brand: item.brand,
            purchase_price: item.purchase_price,
            purchase_date: item.purchase_date.format("%Y-%m-%d").to_string(),
        }
    }
}
