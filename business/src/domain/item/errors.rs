use crate::domain::errors::RepositoryError;

/// A single failed validation rule on an item patch.
///
/// The `Display` text is the message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemViolation {
    #[error("name cannot be empty")]
    NameEmpty,
    #[error("purchase_price must be 0 or greater")]
    NegativePurchasePrice,
    #[error("at least one field (name, brand, or purchase_price) must be provided")]
    NoFieldsProvided,
}

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.invalid_id")]
    InvalidId,
    #[error("item.validation_failed")]
    Validation(Vec<ItemViolation>),
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(RepositoryError),
}

impl ItemError {
    /// The only conversion from repository failures, so a missing item can
    /// never surface as an internal error.
    pub fn from_repository(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ItemError::NotFound,
            other => ItemError::Repository(other),
        }
    }
}
