//! Catalog record types
//!
//! Field names match the JSON served by `/api/products` and `/api/products/{id}`.

use serde::{Deserialize, Serialize};

/// Product identifier (integer, never negative)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Raw numeric value
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Catalog list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductShortInfo {
    /// Product key
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
}

/// Full product detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product key
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Color name
    pub color: String,
    /// Marketing description
    pub description: String,
    /// Material name
    pub material: String,
}

impl Product {
    /// Short form used by the catalog listing
    #[must_use]
    pub fn short_info(&self) -> ProductShortInfo {
        ProductShortInfo {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
        }
    }
}
