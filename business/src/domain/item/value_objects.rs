use super::errors::ItemError;

/// Numeric identifier of a catalog item.
///
/// Any value that parses as a 64-bit integer is accepted; whether an item
/// exists for it is only known once the repository has been queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parses an identifier taken from a request path.
    pub fn parse(raw: &str) -> Result<Self, ItemError> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ItemError::InvalidId)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
