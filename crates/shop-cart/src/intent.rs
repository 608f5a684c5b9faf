//! Cart intents and change events

use crate::line::ProductSnapshot;
use serde::{Deserialize, Serialize};
use shop_catalog::ProductId;
use std::num::NonZeroU32;

/// Request to change the cart
///
/// `AddItem` must carry a fully resolved snapshot; a product still being
/// fetched has no snapshot to put here.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Add one unit of a product
    AddItem {
        /// Line key
        product_id: ProductId,
        /// Fields stored if this is the first unit
        snapshot: ProductSnapshot,
    },
    /// Drop a product's line entirely
    RemoveItem(ProductId),
    /// Empty the cart and forget the persisted snapshot
    Clear,
}

impl CartIntent {
    /// Add intent keyed by the snapshot's own id
    #[inline]
    #[must_use]
    pub fn add(snapshot: impl Into<ProductSnapshot>) -> Self {
        let snapshot = snapshot.into();
        Self::AddItem {
            product_id: snapshot.id,
            snapshot,
        }
    }

    /// Remove intent
    #[inline]
    #[must_use]
    pub fn remove(product_id: impl Into<ProductId>) -> Self {
        Self::RemoveItem(product_id.into())
    }
}

/// Change produced by a dispatched intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    /// A unit was added; `quantity` is the line's new quantity
    Added {
        /// Line key
        product_id: ProductId,
        /// Quantity after the add
        quantity: NonZeroU32,
    },
    /// A line was deleted
    Removed {
        /// Line key
        product_id: ProductId,
    },
    /// All lines were dropped
    Cleared,
}

impl CartEvent {
    /// Product touched by this event, if any
    #[inline]
    #[must_use]
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::Added { product_id, .. } | Self::Removed { product_id } => Some(*product_id),
            Self::Cleared => None,
        }
    }
}
