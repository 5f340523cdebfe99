mod common;

use bakery_service::models::PRODUCT_COLLECTION;
use bakery_service::services::DocumentStore;
use bson::doc;
use common::TestApp;

#[tokio::test]
async fn empty_catalog_lists_no_products() {
    let app = TestApp::spawn().await;

    let response = app.get("/products").await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn seeded_catalog_lists_four_products_with_ids() {
    let app = TestApp::spawn().await;
    assert_eq!(app.post("/seed").await.status(), 200);

    let body: Vec<serde_json::Value> = app
        .get("/products")
        .await
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(body.len(), 4);
    for product in &body {
        assert!(product["id"].is_string());
        assert!(product["price"].is_number());
        assert!(product["in_stock"].is_boolean());
    }

    let titles: Vec<_> = body.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        ["Sourdough Loaf", "Chocolate Croissant", "Blueberry Muffin", "Cinnamon Roll"]
    );
    assert_eq!(body[1]["price"], 3.25);
    assert_eq!(body[1]["category"], "Pastry");
}

#[tokio::test]
async fn partial_documents_are_served_with_defaults() {
    let app = TestApp::spawn().await;
    app.memory_store()
        .insert(
            PRODUCT_COLLECTION,
            doc! { "title": "Day-old Baguette", "description": "Half price", "price": 2 },
        )
        .await
        .unwrap();

    let body: Vec<serde_json::Value> = app.get("/products").await.json().await.unwrap();

    assert_eq!(body.len(), 1);
    let product = &body[0];
    assert!(product["id"].is_string());
    assert_eq!(product["price"].as_f64(), Some(2.0));
    assert_eq!(product["category"], "");
    assert_eq!(product["in_stock"], true);
    assert!(product["image_url"].is_null());
}

#[tokio::test]
async fn store_failure_on_listing_is_a_server_error() {
    let app = TestApp::spawn().await;
    app.memory_store().fail_with("connection reset by peer").await;

    let response = app.get("/products").await;
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Database error");
}

#[tokio::test]
async fn unusable_prices_are_served_as_zero() {
    let app = TestApp::spawn().await;
    for price in ["NaN", "inf"] {
        app.memory_store()
            .insert(
                PRODUCT_COLLECTION,
                doc! { "title": "Mystery Tart", "description": "Ask at the counter", "price": price },
            )
            .await
            .unwrap();
    }

    let body: Vec<serde_json::Value> = app.get("/products").await.json().await.unwrap();

    assert_eq!(body.len(), 2);
    for product in &body {
        assert_eq!(product["price"].as_f64(), Some(0.0));
    }
}
