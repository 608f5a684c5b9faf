//! Storefront Tests
//!
//! Composition, hydration order and reload behavior. A "reload" is a second
//! `Storefront::init` over the same storage.

use pretty_assertions::assert_eq;
use shop_cart::{CartEvent, CartIntent, CartStateError, ProductSnapshot};
use shop_catalog::{CatalogError, MockProductCatalogClient, ProductId, StaticCatalog};
use shop_core::{ProductView, Storefront, StorefrontConfig, StorefrontError};
use shop_persist::{MemoryStorage, StorageSlot, DEFAULT_CART_KEY};
use shop_test_utils::{
    cart_with, fixture_catalog, gorgeous_kogtetochka, memory_persistence, recycled_kogtetochka,
    seeded_storage, small_kogtetochka,
};

fn page_load(storage: &MemoryStorage) -> Storefront<StaticCatalog> {
    Storefront::init(
        fixture_catalog(),
        memory_persistence(storage),
        StorefrontConfig::default(),
    )
}

#[tokio::test]
async fn test_two_products_from_catalog() {
    let storage = MemoryStorage::new();
    let mut storefront = page_load(&storage);

    storefront.add_product(ProductId(0)).await.unwrap();
    storefront.add_product(ProductId(1)).await.unwrap();

    assert_eq!(storefront.cart().distinct_count(), 2);
    assert_eq!(storefront.cart().grand_total(), 542.0);
    assert_eq!(storefront.cart_label(), "Cart (2)");

    let summary = storefront.cart_summary();
    let names: Vec<_> = summary.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Recycled kogtetochka", "Gorgeous kogtetochka"]);
}

#[tokio::test]
async fn test_repeat_add_increments_quantity() {
    let storage = MemoryStorage::new();
    let mut storefront = page_load(&storage);

    storefront.add_product(ProductId(2)).await.unwrap();
    let event = storefront.add_product(ProductId(2)).await.unwrap();

    assert!(matches!(event, CartEvent::Added { quantity, .. } if quantity.get() == 2));
    assert_eq!(storefront.cart().distinct_count(), 1);
    assert_eq!(storefront.cart().line_total(ProductId(2)), Some(1602.0));
}

#[tokio::test]
async fn test_reload_restores_cart() {
    let storage = MemoryStorage::new();

    let mut first = page_load(&storage);
    first.add_product(ProductId(0)).await.unwrap();
    first.add_product(ProductId(0)).await.unwrap();
    first.add_product(ProductId(1)).await.unwrap();
    let before = first.teardown();

    let second = page_load(&storage);
    assert_eq!(second.state(), &before);
    assert_eq!(
        second.cart_summary().rows[0].quantity,
        2,
        "quantity survives reload"
    );
}

#[tokio::test]
async fn test_clear_then_reload_is_empty() {
    let storage = MemoryStorage::new();

    let mut first = page_load(&storage);
    first.add_product(ProductId(0)).await.unwrap();
    first.add_product(ProductId(1)).await.unwrap();
    first.dispatch(CartIntent::Clear);
    assert!(storage.get(DEFAULT_CART_KEY).unwrap().is_none());

    let second = page_load(&storage);
    assert_eq!(second.cart().distinct_count(), 0);
    assert_eq!(second.cart_label(), "Cart");
}

#[test]
fn test_hydration_happens_before_first_read() {
    let state = cart_with(&[recycled_kogtetochka(), gorgeous_kogtetochka()]);
    let storage = seeded_storage(&state);

    let storefront = page_load(&storage);
    let mut events = storefront.subscribe();

    assert_eq!(storefront.state(), &state);
    assert!(storefront.is_in_cart(ProductId(1)));
    assert!(events.try_recv().is_err(), "hydration emits no events");
}

#[test]
fn test_malformed_snapshot_starts_empty() {
    let storage = MemoryStorage::new();
    storage
        .set(DEFAULT_CART_KEY, r#"{"0":{"name":"x","price":1,"count":1}}"#)
        .unwrap();

    let mut storefront = page_load(&storage);
    assert_eq!(storefront.cart().distinct_count(), 0);

    storefront.dispatch(CartIntent::add(ProductSnapshot::from(&small_kogtetochka())));
    let reloaded = page_load(&storage);
    assert_eq!(reloaded.cart().distinct_count(), 1);
}

#[tokio::test]
async fn test_transport_error_leaves_cart_untouched() {
    let storage = seeded_storage(&cart_with(&[recycled_kogtetochka()]));
    let persisted_before = storage.get(DEFAULT_CART_KEY).unwrap();

    let mut catalog = MockProductCatalogClient::new();
    catalog
        .expect_get_product()
        .times(1)
        .returning(|_| Err(CatalogError::transport("connection reset")));

    let mut storefront = Storefront::init(
        catalog,
        memory_persistence(&storage),
        StorefrontConfig::default(),
    );
    let mut events = storefront.subscribe();

    let err = storefront.add_product(ProductId(1)).await.unwrap_err();
    assert!(matches!(err, StorefrontError::Catalog(CatalogError::Transport(_))));
    assert_eq!(storefront.cart().distinct_count(), 1);
    assert_eq!(storage.get(DEFAULT_CART_KEY).unwrap(), persisted_before);
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_unusable_price_is_rejected() {
    let storage = seeded_storage(&cart_with(&[recycled_kogtetochka()]));
    let persisted_before = storage.get(DEFAULT_CART_KEY).unwrap();

    let mut catalog = MockProductCatalogClient::new();
    catalog.expect_get_product().times(1).returning(|_| {
        let mut product = gorgeous_kogtetochka();
        product.price = -1.0;
        Ok(product)
    });

    let mut storefront = Storefront::init(
        catalog,
        memory_persistence(&storage),
        StorefrontConfig::default(),
    );
    let mut events = storefront.subscribe();

    let err = storefront.add_product(ProductId(1)).await.unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Cart(CartStateError::InvalidPrice { .. })
    ));
    assert_eq!(storefront.cart().distinct_count(), 1);
    assert_eq!(storage.get(DEFAULT_CART_KEY).unwrap(), persisted_before);
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_catalog_refresh_does_not_touch_cart() {
    let storage = MemoryStorage::new();

    let mut catalog = MockProductCatalogClient::new();
    let mut calls = 0;
    catalog.expect_get_product().times(2).returning(move |_| {
        calls += 1;
        let mut product = recycled_kogtetochka();
        if calls > 1 {
            product.price = 999.0;
            product.name = "Repriced kogtetochka".to_string();
        }
        Ok(product)
    });

    let mut storefront = Storefront::init(
        catalog,
        memory_persistence(&storage),
        StorefrontConfig::default(),
    );
    storefront.add_product(ProductId(0)).await.unwrap();

    let view = storefront.product_view(ProductId(0)).await;
    assert_eq!(view.product().unwrap().price, 999.0);

    let line = storefront.state().line(ProductId(0)).unwrap();
    assert_eq!(line.snapshot.price, 541.0);
    assert_eq!(line.snapshot.name, "Recycled kogtetochka");
}

#[tokio::test]
async fn test_catalog_rows_flag_items_in_cart() {
    let storage = MemoryStorage::new();
    let mut storefront = page_load(&storage);
    storefront.add_product(ProductId(1)).await.unwrap();

    let flags: Vec<_> = storefront
        .list_catalog()
        .await
        .unwrap()
        .into_iter()
        .map(|row| (row.product.id, row.in_cart))
        .collect();
    assert_eq!(
        flags,
        vec![
            (ProductId(0), false),
            (ProductId(1), true),
            (ProductId(2), false),
        ]
    );
}

#[tokio::test]
async fn test_product_view_states() {
    let storage = MemoryStorage::new();
    let storefront = page_load(&storage);

    let loaded = storefront.product_view(ProductId(0)).await;
    assert!(loaded.add_to_cart_intent().is_some());

    let missing = storefront.product_view(ProductId(99)).await;
    assert!(matches!(
        missing,
        ProductView::Failed {
            error: CatalogError::NotFound(ProductId(99)),
            ..
        }
    ));
    assert!(missing.add_to_cart_intent().is_none());
}

#[tokio::test]
async fn test_subscribers_receive_events_in_order() {
    let storage = MemoryStorage::new();
    let mut storefront = page_load(&storage);
    let mut events = storefront.subscribe();

    storefront.add_product(ProductId(0)).await.unwrap();
    storefront.dispatch(CartIntent::remove(7u64));
    storefront.dispatch(CartIntent::remove(0u64));
    storefront.dispatch(CartIntent::Clear);

    let received: Vec<_> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    assert_eq!(received.len(), 3);
    assert!(matches!(received[0], CartEvent::Added { .. }));
    assert_eq!(
        received[1],
        CartEvent::Removed {
            product_id: ProductId(0)
        }
    );
    assert_eq!(received[2], CartEvent::Cleared);
}

#[test]
fn test_nav_links_track_cart() {
    let state = cart_with(&[recycled_kogtetochka()]);
    let storage = seeded_storage(&state);
    let storefront = page_load(&storage);

    let links = storefront.nav_links();
    assert_eq!(links.len(), 4);
    assert_eq!(links[3].label, "Cart (1)");
    assert_eq!(links[3].href, "/hw/store/cart");
}

#[test]
fn test_open_hydrates_from_storage_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig::new()
        .with_api_base_url("http://127.0.0.1:9")
        .with_storage_dir(dir.path());

    let mut first = Storefront::open(config.clone()).unwrap();
    first.dispatch(CartIntent::add(ProductSnapshot::from(&gorgeous_kogtetochka())));
    drop(first);

    assert!(dir.path().join("example-store-cart.json").exists());
    let second = Storefront::open(config).unwrap();
    assert!(second.is_in_cart(ProductId(1)));
}

#[test]
fn test_open_rejects_invalid_config() {
    let config = StorefrontConfig::new().with_cart_key("   ");
    assert!(matches!(
        Storefront::open(config),
        Err(StorefrontError::Config(_))
    ));
}
