//! Duplicate detection tests.
//!
//! A product is a duplicate when seller.id, marketplace and title all match
//! an existing product. Other fields never matter.

use crate::common::{
    ENDPOINT_PRODUCTS, assert_json_content_type, duplicate_product_error_response, test_server,
    valid_product, with_auth,
};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_duplicate_product_returns_conflict() {
    let (server, state) = test_server();

    let first = with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&valid_product())
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    // Same triple, different description and price
    let mut duplicate = valid_product();
    duplicate["description"] = json!("Esta descripción diferente no debería importar");
    duplicate["price"] = json!(39.99);

    let second = with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&duplicate)
        .await;

    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    assert_json_content_type(&second);

    let body: Value = second.json();
    assert_eq!(
        body,
        duplicate_product_error_response("seller-123", "amazon", "Producto de Prueba Premium")
    );
    assert!(body["message"].as_str().unwrap().contains("already exists"));

    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_changing_any_key_field_is_not_a_duplicate() {
    let (server, state) = test_server();

    let first = with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&valid_product())
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let variants = [
        ("/seller/id", json!("seller-456")),
        ("/marketplace", json!("mercadolibre")),
        ("/title", json!("Producto de Prueba Estándar")),
    ];

    for (pointer, value) in variants {
        let mut product = valid_product();
        *product.pointer_mut(pointer).unwrap() = value;

        let response = with_auth(server.post(ENDPOINT_PRODUCTS)).json(&product).await;
        assert_eq!(
            response.status_code(),
            StatusCode::CREATED,
            "changing {pointer} should not conflict"
        );
    }

    assert_eq!(state.store.len(), 4);
}

#[tokio::test]
async fn test_key_comparison_is_case_sensitive() {
    let (server, _state) = test_server();

    with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&valid_product())
        .await;

    let mut product = valid_product();
    product["marketplace"] = json!("Amazon");

    let response = with_auth(server.post(ENDPOINT_PRODUCTS)).json(&product).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_seller_name_does_not_affect_duplicates() {
    let (server, _state) = test_server();

    with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&valid_product())
        .await;

    let mut product = valid_product();
    product["seller"]["name"] = json!("Acme Corporation");

    let response = with_auth(server.post(ENDPOINT_PRODUCTS)).json(&product).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_clear_allows_recreation() {
    let (server, state) = test_server();

    let first = with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&valid_product())
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    state.store.clear();

    let second = with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&valid_product())
        .await;
    assert_eq!(second.status_code(), StatusCode::CREATED);
    assert_eq!(state.store.len(), 1);
}
