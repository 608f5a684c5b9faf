//! Storefront Catalog
//!
//! Product records served by the store backend and the clients that fetch them.
//!
//! # Core Concepts
//!
//! - [`ProductId`]: Integer product key shared by catalog and cart
//! - [`ProductShortInfo`]: Catalog list row (id, name, price)
//! - [`Product`]: Full product detail record
//! - [`ProductCatalogClient`]: Async source of catalog data
//! - [`HttpCatalogClient`]: Client for the store's JSON API
//! - [`StaticCatalog`]: In-memory catalog for tests and offline use
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_catalog::{HttpCatalogClient, ProductCatalogClient, ProductId};
//! use std::time::Duration;
//!
//! let client = HttpCatalogClient::new("http://localhost:3000", "/hw/store", Duration::from_secs(5))?;
//! let product = client.get_product(ProductId(0)).await?;
//! println!("{} costs ${}", product.name, product.price);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod client;
mod error;
mod http;
mod product;

pub use client::{ProductCatalogClient, StaticCatalog};
pub use error::CatalogError;
pub use http::HttpCatalogClient;
pub use product::{Product, ProductId, ProductShortInfo};

#[cfg(any(test, feature = "mock"))]
pub use client::MockProductCatalogClient;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
