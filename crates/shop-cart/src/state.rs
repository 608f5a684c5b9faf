//! Cart state: ordered lines, reducer and selectors

use crate::intent::{CartEvent, CartIntent};
use crate::line::{CartLine, ProductSnapshot};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use shop_catalog::ProductId;
use std::num::NonZeroU32;

/// Errors when building a state from raw lines
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartStateError {
    /// Two lines share a product id
    #[error("duplicate line for product {0}")]
    DuplicateProduct(ProductId),

    /// Price is negative or not a finite number
    #[error("invalid price {price} for product {product_id}")]
    InvalidPrice {
        /// Offending line
        product_id: ProductId,
        /// Rejected price
        price: f64,
    },
}

/// Cart contents
///
/// Lines keep first-added order. Serialized as an ordered list of lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "Vec<CartLine>", try_from = "Vec<CartLine>")]
pub struct CartState {
    lines: IndexMap<ProductId, CartLine>,
}

impl CartState {
    /// Empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from lines in order
    ///
    /// # Errors
    /// Returns error on a repeated product id or an unusable price
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Result<Self, CartStateError> {
        let mut map = IndexMap::new();
        for line in lines {
            check_price(line.product_id, line.price())?;
            let product_id = line.product_id;
            if map.insert(product_id, line).is_some() {
                return Err(CartStateError::DuplicateProduct(product_id));
            }
        }
        Ok(Self { lines: map })
    }

    /// Apply an intent in place
    ///
    /// Returns `None` when nothing changed: removing an absent product, or
    /// adding a snapshot with an unusable price.
    pub(crate) fn apply(&mut self, intent: CartIntent) -> Option<CartEvent> {
        match intent {
            CartIntent::AddItem {
                product_id,
                snapshot,
            } => match self.add(product_id, snapshot) {
                Ok(event) => Some(event),
                Err(error) => {
                    tracing::warn!(%error, "add rejected, cart unchanged");
                    None
                }
            },
            CartIntent::RemoveItem(product_id) => self.remove(product_id),
            CartIntent::Clear => Some(self.clear()),
        }
    }

    /// Increment an existing line or append a new one
    ///
    /// The line is keyed by `product_id`; a snapshot carrying another id is
    /// re-stamped so key and snapshot always agree.
    pub(crate) fn add(
        &mut self,
        product_id: ProductId,
        mut snapshot: ProductSnapshot,
    ) -> Result<CartEvent, CartStateError> {
        check_price(product_id, snapshot.price)?;
        if snapshot.id != product_id {
            tracing::warn!(
                %product_id,
                snapshot_id = %snapshot.id,
                "snapshot id differs from line key"
            );
            snapshot.id = product_id;
        }

        let line = self
            .lines
            .entry(product_id)
            .and_modify(CartLine::increment)
            .or_insert_with(|| CartLine::new(product_id, snapshot));
        Ok(CartEvent::Added {
            product_id,
            quantity: line.quantity,
        })
    }

    pub(crate) fn remove(&mut self, product_id: ProductId) -> Option<CartEvent> {
        self.lines
            .shift_remove(&product_id)
            .map(|_| CartEvent::Removed { product_id })
    }

    pub(crate) fn clear(&mut self) -> CartEvent {
        self.lines.clear();
        CartEvent::Cleared
    }

    /// Number of lines, independent of quantities
    #[inline]
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart has no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in first-added order
    #[inline]
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLine> + '_ {
        self.lines.values()
    }

    /// Product ids in first-added order
    #[inline]
    pub fn product_ids(&self) -> impl ExactSizeIterator<Item = ProductId> + '_ {
        self.lines.keys().copied()
    }

    /// Line for a product
    #[inline]
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    /// Check if product is in the cart
    #[inline]
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.lines.contains_key(&product_id)
    }

    /// Quantity of a product, `None` if absent
    #[inline]
    #[must_use]
    pub fn quantity(&self, product_id: ProductId) -> Option<NonZeroU32> {
        self.line(product_id).map(|l| l.quantity)
    }

    /// Price times quantity for one line
    #[inline]
    #[must_use]
    pub fn line_total(&self, product_id: ProductId) -> Option<f64> {
        self.line(product_id).map(CartLine::total)
    }

    /// Sum of all line totals
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.lines.values().map(CartLine::total).sum()
    }

    /// Sum of quantities across lines
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.values().map(|l| u64::from(l.quantity.get())).sum()
    }
}

/// Prices must be finite and not negative
fn check_price(product_id: ProductId, price: f64) -> Result<(), CartStateError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CartStateError::InvalidPrice { product_id, price })
    }
}

// Order matters: two carts with the same lines added in a different order
// render differently, so they are not equal.
impl PartialEq for CartState {
    fn eq(&self, other: &Self) -> bool {
        self.lines.len() == other.lines.len() && self.lines.values().eq(other.lines.values())
    }
}

impl From<CartState> for Vec<CartLine> {
    fn from(state: CartState) -> Self {
        state.lines.into_values().collect()
    }
}

impl TryFrom<Vec<CartLine>> for CartState {
    type Error = CartStateError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}
