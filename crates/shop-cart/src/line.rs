//! Cart line and product snapshot

use serde::{Deserialize, Serialize};
use shop_catalog::{Product, ProductId, ProductShortInfo};
use std::num::NonZeroU32;

/// Product fields captured when the product first enters the cart
///
/// Later catalog changes never reach an existing snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product key
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Color name, when captured from a detail record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Description, when captured from a detail record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Material, when captured from a detail record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl ProductSnapshot {
    /// Snapshot with only the required fields
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            color: None,
            description: None,
            material: None,
        }
    }
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            color: Some(product.color.clone()),
            description: Some(product.description.clone()),
            material: Some(product.material.clone()),
        }
    }
}

impl From<Product> for ProductSnapshot {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            color: Some(product.color),
            description: Some(product.description),
            material: Some(product.material),
        }
    }
}

impl From<&ProductShortInfo> for ProductSnapshot {
    fn from(info: &ProductShortInfo) -> Self {
        Self::new(info.id, info.name.clone(), info.price)
    }
}

/// One product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Key of this line
    pub product_id: ProductId,
    /// Fields captured at first add
    pub snapshot: ProductSnapshot,
    /// Units of the product (never zero)
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// New line holding one unit
    #[inline]
    #[must_use]
    pub fn new(product_id: ProductId, snapshot: ProductSnapshot) -> Self {
        Self {
            product_id,
            snapshot,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Unit price
    #[inline]
    #[must_use]
    pub fn price(&self) -> f64 {
        self.snapshot.price
    }

    /// Price times quantity
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.snapshot.price * f64::from(self.quantity.get())
    }

    /// Add one unit
    #[inline]
    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_from_detail_keeps_all_fields() {
        let product = Product {
            id: ProductId(0),
            name: "Recycled kogtetochka".to_string(),
            price: 541.0,
            color: "turquoise".to_string(),
            description: "Really Electronic kogtetochka for Serengeti".to_string(),
            material: "Wooden".to_string(),
        };

        let snapshot = ProductSnapshot::from(&product);
        assert_eq!(snapshot.color.as_deref(), Some("turquoise"));
        assert_eq!(snapshot.material.as_deref(), Some("Wooden"));
        assert_eq!(snapshot, ProductSnapshot::from(product));
    }

    #[test]
    fn snapshot_json_omits_missing_fields() {
        let snapshot = ProductSnapshot::new(1u64, "Gorgeous kogtetochka", 1.0);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Gorgeous kogtetochka","price":1.0}"#);
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let mut line = CartLine::new(ProductId(0), ProductSnapshot::new(0u64, "a", 801.0));
        assert_eq!(line.total(), 801.0);
        line.increment();
        assert_eq!(line.quantity.get(), 2);
        assert_eq!(line.total(), 1602.0);
    }

    #[test]
    fn zero_quantity_does_not_decode() {
        let json = r#"{"product_id":0,"snapshot":{"id":0,"name":"a","price":1.0},"quantity":0}"#;
        assert!(serde_json::from_str::<CartLine>(json).is_err());
    }
}
