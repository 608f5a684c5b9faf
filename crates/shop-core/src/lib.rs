//! Storefront Core
//!
//! Composition root for the storefront:
//! - Loads configuration
//! - Hydrates the cart from durable storage before anything reads it
//! - Routes cart intents through the store so every change is persisted
//! - Exposes catalog access and presentation views
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_core::{Storefront, StorefrontConfig};
//! use shop_catalog::ProductId;
//!
//! # async fn example() -> Result<(), shop_core::StorefrontError> {
//! let mut storefront = Storefront::open(StorefrontConfig::load("storefront.toml")?)?;
//!
//! storefront.add_product(ProductId(0)).await?;
//! println!("{}: ${}", storefront.cart_label(), storefront.cart().grand_total());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod nav;
pub mod storefront;
pub mod view;

pub use config::{ConfigError, StorefrontConfig};
pub use error::StorefrontError;
pub use nav::NavLink;
pub use storefront::Storefront;
pub use view::{CartRow, CartSummary, CatalogRow, ProductView};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the storefront
    pub use crate::{Storefront, StorefrontConfig, StorefrontError};
    pub use shop_cart::{CartEvent, CartIntent, CartState, ProductSnapshot};
    pub use shop_catalog::{Product, ProductCatalogClient, ProductId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
