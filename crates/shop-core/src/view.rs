//! Presentation-facing views
//!
//! Plain data the pages render from. Building them never mutates the cart.

use serde::Serialize;
use shop_cart::{CartIntent, CartState};
use shop_catalog::{CatalogError, Product, ProductId, ProductShortInfo};

/// State of a product detail fetch
///
/// Only [`ProductView::Loaded`] can produce an add-to-cart intent, so a
/// product that is still loading or failed to load never reaches the cart.
#[derive(Debug)]
pub enum ProductView {
    /// Fetch in flight
    Loading(ProductId),
    /// Fully resolved detail record
    Loaded(Product),
    /// Fetch failed
    Failed {
        /// Requested product
        id: ProductId,
        /// Transport or lookup failure
        error: CatalogError,
    },
}

impl ProductView {
    /// View from a finished fetch
    #[must_use]
    pub fn from_result(id: ProductId, result: Result<Product, CatalogError>) -> Self {
        match result {
            Ok(product) => Self::Loaded(product),
            Err(error) => Self::Failed { id, error },
        }
    }

    /// Requested product id
    #[inline]
    #[must_use]
    pub fn id(&self) -> ProductId {
        match self {
            Self::Loading(id) | Self::Failed { id, .. } => *id,
            Self::Loaded(product) => product.id,
        }
    }

    /// Resolved product, if loaded
    #[inline]
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Loaded(product) => Some(product),
            _ => None,
        }
    }

    /// Add-to-cart intent; `None` unless loaded
    #[must_use]
    pub fn add_to_cart_intent(&self) -> Option<CartIntent> {
        self.product().map(CartIntent::add)
    }
}

/// Catalog listing row with the "Item in cart" flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    /// Listing data
    #[serde(flatten)]
    pub product: ProductShortInfo,
    /// Whether the product already has a cart line
    pub in_cart: bool,
}

/// One row of the cart table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartRow {
    /// 1-based row number
    pub position: usize,
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
}

/// Cart page contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    /// Rows in first-added order
    pub rows: Vec<CartRow>,
    /// Number of distinct products
    pub distinct_count: usize,
    /// Sum of row totals
    pub grand_total: f64,
}

impl CartSummary {
    /// Summarize a cart state
    #[must_use]
    pub fn from_state(state: &CartState) -> Self {
        let rows = state
            .lines()
            .enumerate()
            .map(|(index, line)| CartRow {
                position: index + 1,
                product_id: line.product_id,
                name: line.snapshot.name.clone(),
                price: line.price(),
                quantity: line.quantity.get(),
                total: line.total(),
            })
            .collect();

        Self {
            rows,
            distinct_count: state.distinct_count(),
            grand_total: state.grand_total(),
        }
    }

    /// Check if there is nothing to show
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
