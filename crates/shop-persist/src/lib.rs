//! Storefront Persistence
//!
//! Keeps the cart alive across reloads by writing a snapshot to a durable
//! key-value slot after every mutation.
//!
//! # Core Concepts
//!
//! - [`StorageSlot`]: Durable string storage by key ([`MemoryStorage`], [`FileStorage`])
//! - [`PersistedSnapshot`]: Versioned JSON envelope around a [`CartState`](shop_cart::CartState)
//! - [`PersistenceAdapter`]: `save` / `load` / `delete` contract
//! - [`SlotPersistence`]: Adapter over any slot and key
//! - [`PersistObserver`]: Cart observer that saves on change and deletes on clear
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_persist::{FileStorage, PersistObserver, PersistenceAdapter, SlotPersistence};
//! use shop_cart::CartStore;
//! use std::sync::Arc;
//!
//! let adapter = Arc::new(SlotPersistence::new(FileStorage::new("./data"), "example-store-cart"));
//! let mut store = CartStore::with_state(adapter.load().unwrap_or_default());
//! store.subscribe(PersistObserver::new(adapter));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod adapter;
mod error;
mod file;
mod observer;
mod slot;
mod snapshot;

pub use adapter::{PersistenceAdapter, SlotPersistence, DEFAULT_CART_KEY};
pub use error::{PersistError, SnapshotError, StorageError};
pub use file::FileStorage;
pub use observer::PersistObserver;
pub use slot::{MemoryStorage, StorageSlot};
pub use snapshot::{PersistedSnapshot, SNAPSHOT_VERSION};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
