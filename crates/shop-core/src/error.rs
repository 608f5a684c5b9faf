//! Error types for the storefront
//!
//! Catalog failures, rejected cart additions and configuration problems reach
//! callers. Persistence problems are recovered inside the store and never
//! show up here.

use crate::config::ConfigError;
use shop_cart::CartStateError;
use shop_catalog::CatalogError;

/// Main storefront error type
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Catalog fetch failed; shown to the user, not retried
    #[error("catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    /// Product could not be added to the cart
    #[error("cart rejected product: {0}")]
    Cart(#[from] CartStateError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Check if error came from the catalog backend
    #[inline]
    #[must_use]
    pub fn is_catalog(&self) -> bool {
        matches!(self, Self::Catalog(_))
    }
}
