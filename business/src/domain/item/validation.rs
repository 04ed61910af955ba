use super::errors::ItemViolation;
use super::patch::ItemPatch;

type Rule = fn(&ItemPatch) -> Option<ItemViolation>;

/// Rules in the order their violations are reported.
const RULES: [Rule; 3] = [name_not_blank, purchase_price_not_negative, any_field_present];

/// Runs every rule against the patch and collects all violations.
pub fn validate(patch: &ItemPatch) -> Vec<ItemViolation> {
    RULES.iter().filter_map(|rule| rule(patch)).collect()
}

fn name_not_blank(patch: &ItemPatch) -> Option<ItemViolation> {
    match &patch.name {
        Some(name) if name.trim().is_empty() => Some(ItemViolation::NameEmpty),
        _ => None,
    }
}

fn purchase_price_not_negative(patch: &ItemPatch) -> Option<ItemViolation> {
    match patch.purchase_price {
        Some(price) if price < 0 => Some(ItemViolation::NegativePurchasePrice),
        _ => None,
    }
}

// Presence only: an invalid but provided field still counts.
fn any_field_present(patch: &ItemPatch) -> Option<ItemViolation> {
    patch.is_empty().then_some(ItemViolation::NoFieldsProvided)
}
