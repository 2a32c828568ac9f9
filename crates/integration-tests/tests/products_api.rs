//! Integration tests for the product listing and detail endpoints.

#![allow(clippy::unwrap_used)]

use bramsstore_integration_tests::spawn_app;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_listing_returns_full_catalog_by_default() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 6);
    assert_eq!(body["products"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_listing_filters_by_category() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/products?category=audio"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let products = body["products"].as_array().unwrap();
    assert!(!products.is_empty());
    for product in products {
        assert_eq!(product["category"], "audio");
    }
}

#[tokio::test]
async fn test_listing_category_all_is_no_constraint() {
    let app = spawn_app().await;

    let all: Value = app
        .client
        .get(app.url("/products?category=all"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(all["total"], 6);
}

#[tokio::test]
async fn test_listing_search_is_case_insensitive() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/products?q=NOVAPHONE"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["name"], "NovaPhone X5");
}

#[tokio::test]
async fn test_listing_filters_compose() {
    let app = spawn_app().await;

    // Search term matches an audio product, but the category excludes it
    let body: Value = app
        .client
        .get(app.url("/products?category=laptops&q=auriculares"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_listing_rejects_unknown_category() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/products?category=bicycles"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("bicycles"));
}

#[tokio::test]
async fn test_detail_returns_product() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/products/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "NovaPhone X5");
    assert_eq!(body["price"], 650_000);
    assert_eq!(body["price_display"], "₡650000");
}

#[tokio::test]
async fn test_detail_unknown_product_is_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/products/999"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
