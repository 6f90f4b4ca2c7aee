//! Endpoint path configuration tests.

use crate::common::{API_VERSION, ENDPOINT_PRODUCTS, test_server, test_server_with, valid_product, with_auth};
use axum::http::StatusCode;
use catalog::Config;
use catalog::config::Endpoints;

#[tokio::test]
async fn test_default_path_uses_api_version() {
    let config = Config::default();
    assert_eq!(config.api_version, API_VERSION);
    assert_eq!(config.endpoints.products, ENDPOINT_PRODUCTS);
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let (server, _state) = test_server();

    let response = with_auth(server.post("/api/v1/items"))
        .json(&valid_product())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_configured_path_is_served() {
    let config = Config {
        api_version: "v2".to_string(),
        endpoints: Endpoints::for_version("v2"),
    };
    let (server, state) = test_server_with(config);

    let moved = with_auth(server.post("/api/v2/products"))
        .json(&valid_product())
        .await;
    assert_eq!(moved.status_code(), StatusCode::CREATED);

    let old = with_auth(server.post(ENDPOINT_PRODUCTS))
        .json(&valid_product())
        .await;
    assert_eq!(old.status_code(), StatusCode::NOT_FOUND);

    assert_eq!(state.store.len(), 1);
}
