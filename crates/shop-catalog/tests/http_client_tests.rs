//! HttpCatalogClient Tests
//!
//! Runs the client against an in-process warp server that mimics the store API.

use pretty_assertions::assert_eq;
use shop_catalog::{CatalogError, HttpCatalogClient, Product, ProductCatalogClient, ProductId};
use std::net::SocketAddr;
use std::time::Duration;
use warp::http::StatusCode;
use warp::{Filter, Reply};

fn fixture_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(0),
            name: "Small kogtetochka".to_string(),
            price: 801.0,
            color: "turquoise".to_string(),
            description: "Really Electronic kogtetochka for Serengeti".to_string(),
            material: "Wooden".to_string(),
        },
        Product {
            id: ProductId(1),
            name: "Recycled kogtetochka".to_string(),
            price: 541.0,
            color: "orchid".to_string(),
            description: "Really Oriental kogtetochka for Balinese".to_string(),
            material: "Steel".to_string(),
        },
    ]
}

fn spawn_store_api() -> SocketAddr {
    let products = fixture_products();
    let listing: Vec<_> = products.iter().map(Product::short_info).collect();

    let list = warp::path!("hw" / "store" / "api" / "products")
        .map(move || warp::reply::json(&listing));

    let detail = warp::path!("hw" / "store" / "api" / "products" / u64).map(move |id: u64| {
        match products.iter().find(|p| p.id == ProductId(id)) {
            Some(product) => warp::reply::json(product).into_response(),
            None => warp::reply::with_status("missing", StatusCode::NOT_FOUND).into_response(),
        }
    });

    let broken = warp::path!("broken" / "api" / "products")
        .map(|| warp::reply::with_status("boom", StatusCode::INTERNAL_SERVER_ERROR));

    let garbage = warp::path!("garbage" / "api" / "products" / u64)
        .map(|_id: u64| warp::reply::json(&serde_json::json!({ "id": "not-a-number" })));

    let negative_list = warp::path!("negative" / "api" / "products").map(|| {
        warp::reply::json(&serde_json::json!([
            { "id": 0, "name": "Small kogtetochka", "price": 801.0 },
            { "id": 1, "name": "Refund kogtetochka", "price": -5.0 },
        ]))
    });

    let negative_detail = warp::path!("negative" / "api" / "products" / u64).map(|id: u64| {
        warp::reply::json(&serde_json::json!({
            "id": id,
            "name": "Refund kogtetochka",
            "price": -5.0,
            "color": "red",
            "description": "Pays you to take it",
            "material": "Granite",
        }))
    });

    let routes = list
        .or(detail)
        .or(broken)
        .or(garbage)
        .or(negative_list)
        .or(negative_detail);
    let (addr, server) = warp::serve(routes)
        .bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn client(addr: SocketAddr, basename: &str) -> HttpCatalogClient {
    HttpCatalogClient::new(&format!("http://{addr}"), basename, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_products() {
    let addr = spawn_store_api();
    let client = client(addr, "/hw/store");

    let listing = client.list_products().await.unwrap();
    let names: Vec<_> = listing.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Small kogtetochka", "Recycled kogtetochka"]);
    assert_eq!(listing[1].price, 541.0);
}

#[tokio::test]
async fn test_get_product_detail() {
    let addr = spawn_store_api();
    let client = client(addr, "/hw/store");

    let product = client.get_product(ProductId(1)).await.unwrap();
    assert_eq!(product, fixture_products()[1]);
}

#[tokio::test]
async fn test_get_missing_product_is_not_found() {
    let addr = spawn_store_api();
    let client = client(addr, "/hw/store");

    let err = client.get_product(ProductId(42)).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(ProductId(42))));
}

#[tokio::test]
async fn test_server_error_is_status() {
    let addr = spawn_store_api();
    let client = client(addr, "/broken");

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let addr = spawn_store_api();
    let client = client(addr, "/garbage");

    let err = client.get_product(ProductId(0)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_negative_price_is_decode_error() {
    let addr = spawn_store_api();
    let client = client(addr, "/negative");

    let err = client.get_product(ProductId(1)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(ref msg) if msg.contains("-5")));

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop a listener so the port is very likely closed.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = HttpCatalogClient::new(
        &format!("http://127.0.0.1:{port}"),
        "/hw/store",
        Duration::from_secs(2),
    )
    .unwrap();

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
}
