//! Testing utilities for the storefront workspace
//!
//! Shared catalog fixtures and storage helpers.

#![allow(missing_docs)]

use shop_cart::{CartState, CartStore, ProductSnapshot};
use shop_catalog::{Product, ProductId, StaticCatalog};
use shop_persist::{MemoryStorage, PersistenceAdapter, SlotPersistence};
use std::sync::Arc;

pub fn product(id: u64, name: &str, price: f64, color: &str, material: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        price,
        color: color.to_string(),
        description: format!("Really {material} {name} for Serengeti"),
        material: material.to_string(),
    }
}

pub fn recycled_kogtetochka() -> Product {
    product(0, "Recycled kogtetochka", 541.0, "turquoise", "Wooden")
}

pub fn gorgeous_kogtetochka() -> Product {
    product(1, "Gorgeous kogtetochka", 1.0, "orchid", "Steel")
}

pub fn small_kogtetochka() -> Product {
    product(2, "Small kogtetochka", 801.0, "red", "Granite")
}

pub fn fixture_products() -> Vec<Product> {
    vec![
        recycled_kogtetochka(),
        gorgeous_kogtetochka(),
        small_kogtetochka(),
    ]
}

pub fn fixture_catalog() -> StaticCatalog {
    StaticCatalog::new(fixture_products())
}

/// Adapter over `storage` with the default cart key
pub fn memory_persistence(storage: &MemoryStorage) -> Arc<dyn PersistenceAdapter> {
    Arc::new(SlotPersistence::with_default_key(storage.clone()))
}

/// Cart state built by adding `products` in order
pub fn cart_with(products: &[Product]) -> CartState {
    let mut store = CartStore::new();
    for product in products {
        store
            .add_item(ProductSnapshot::from(product))
            .expect("fixture prices are valid");
    }
    store.into_state()
}

/// Storage already holding a snapshot of `state`
pub fn seeded_storage(state: &CartState) -> MemoryStorage {
    let storage = MemoryStorage::new();
    SlotPersistence::with_default_key(storage.clone())
        .save(state)
        .expect("memory storage write");
    storage
}
