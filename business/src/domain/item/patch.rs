use super::errors::ItemViolation;
use super::validation;

/// Sparse set of changes for an item.
///
/// `None` means the field was not provided and must stay untouched;
/// `Some(value)` means the caller wants it changed, even to an invalid value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub purchase_price: Option<i64>,
}

impl ItemPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.purchase_price.is_none()
    }

    /// Every rule violated by this patch, in rule order.
    pub fn violations(&self) -> Vec<ItemViolation> {
        validation::validate(self)
    }

    pub fn validate(&self) -> Result<(), Vec<ItemViolation>> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
