//! Storefront Cart
//!
//! Reducer-driven cart store keyed by product id.
//!
//! # Core Concepts
//!
//! - [`ProductSnapshot`]: Owned copy of catalog fields taken at first add
//! - [`CartLine`]: One product with its snapshot and quantity (always >= 1)
//! - [`CartState`]: Lines in first-added order, unique per product id
//! - [`CartIntent`]: Add, remove or clear request
//! - [`CartEvent`]: What a dispatched intent changed
//! - [`CartStore`]: Owns the state, applies intents, notifies [`CartObserver`]s
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_cart::{CartIntent, CartStore, ProductSnapshot};
//!
//! let mut store = CartStore::new();
//! store.dispatch(CartIntent::add(snapshot.clone()));
//! store.dispatch(CartIntent::add(snapshot));
//!
//! assert_eq!(store.distinct_count(), 1);
//! assert_eq!(store.grand_total(), 2.0 * price);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod intent;
mod line;
mod state;
mod store;

pub use intent::{CartEvent, CartIntent};
pub use line::{CartLine, ProductSnapshot};
pub use state::{CartState, CartStateError};
pub use store::{CartObserver, CartStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
