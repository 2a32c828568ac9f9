//! Integration tests for the checkout endpoints.

#![allow(clippy::unwrap_used)]

use bramsstore_integration_tests::{TestApp, spawn_app};
use serde_json::{Value, json};

fn valid_customer() -> Value {
    json!({
        "name": "Ana Solís",
        "email": "ana@example.com",
        "phone": "8888-0000",
        "address": "Avenida Central",
        "city": "San José",
        "postal_code": "10101",
        "payment_method": "sinpe"
    })
}

async fn fill_cart(app: &TestApp) {
    for id in ["1", "2", "2"] {
        let response = app
            .client
            .post(app.url("/cart/add"))
            .json(&json!({ "product_id": id }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }
}

#[tokio::test]
async fn test_customer_draft_roundtrip() {
    let app = spawn_app().await;

    let response = app
        .client
        .put(app.url("/checkout/customer"))
        .json(&valid_customer())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = app
        .client
        .get(app.url("/checkout/customer"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["name"], "Ana Solís");
    assert_eq!(body["payment_method"], "sinpe");
}

#[tokio::test]
async fn test_submit_empty_everything_lists_all_fields() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/checkout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["name", "email", "phone", "cart"]);
}

#[tokio::test]
async fn test_submit_invalid_email_is_rejected() {
    let app = spawn_app().await;
    fill_cart(&app).await;

    let mut customer = valid_customer();
    customer["email"] = json!("ana@example");
    app.client
        .put(app.url("/checkout/customer"))
        .json(&customer)
        .send()
        .await
        .unwrap();

    let response = app
        .client
        .post(app.url("/checkout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["fields"][0]["field"], "email");

    // Rejection has no side effects
    let cart: Value = app
        .client
        .get(app.url("/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["item_count"], 3);
}

#[tokio::test]
async fn test_submit_confirms_and_resets() {
    let app = spawn_app().await;
    fill_cart(&app).await;

    app.client
        .put(app.url("/checkout/customer"))
        .json(&valid_customer())
        .send()
        .await
        .unwrap();

    let response = app
        .client
        .post(app.url("/checkout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["subtotal"], 900_000);
    assert_eq!(body["shipping"], 0);
    assert_eq!(body["total"], 900_000);
    assert_eq!(body["item_count"], 3);
    assert_eq!(body["payment_method"], "sinpe");

    let order_id = body["order_id"].as_str().unwrap();
    assert!(order_id.starts_with("BS-"));
    assert!(body["message"].as_str().unwrap().contains(order_id));

    // Cart emptied and draft reset after a confirmed order
    let cart: Value = app
        .client
        .get(app.url("/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["item_count"], 0);

    let customer: Value = app
        .client
        .get(app.url("/checkout/customer"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(customer["name"], "");

    // And a second submit is rejected: the cart is empty again
    let response = app
        .client
        .post(app.url("/checkout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
}
