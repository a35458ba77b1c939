//! Integration tests for the /api/products endpoints.

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, products};
use common::{assert_api_error, assert_ok, assert_status, assert_validation_errors, TestApp};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn names(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_returns_seed_catalog() {
    let app = TestApp::new();

    let response = app.get("/api/products").await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], fixtures::SEED_COUNT);
    assert_eq!(json["total"], fixtures::SEED_COUNT);
    assert_eq!(json["page"], 1);
    assert_eq!(json["pages"], 1);
    assert_eq!(names(&json)[0], "Classic White Button-Up Shirt");
}

#[tokio::test]
async fn test_list_filters_and_paginates() {
    let app = TestApp::new();

    let response = app.get("/api/products?category=dress&limit=2&page=2").await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["count"], 2);
    assert_eq!(json["total"], fixtures::SEED_DRESSES);
    assert_eq!(json["pages"], 3);
    assert_eq!(names(&json), vec!["Burgundy Evening Gown", "Mint Green Sundress"]);
}

#[tokio::test]
async fn test_list_price_range() {
    let app = TestApp::new();

    let response = app.get("/api/products?minPrice=100&maxPrice=200").await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(
        names(&json),
        vec!["Navy Blue Blazer", "Little Black Dress", "Red Cocktail Dress"]
    );
}

#[tokio::test]
async fn test_list_page_past_end_is_empty() {
    let app = TestApp::new();

    let response = app.get("/api/products?page=9").await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["count"], 0);
    assert_eq!(json["total"], fixtures::SEED_COUNT);
    assert_eq!(json["page"], 9);
}

#[tokio::test]
async fn test_list_huge_page_is_empty() {
    let app = TestApp::new();

    let response = app
        .get("/api/products?page=9223372036854775807&limit=100")
        .await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["count"], 0);
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["total"], fixtures::SEED_COUNT);
    assert_eq!(json["page"], 9223372036854775807u64);
}

#[tokio::test]
async fn test_list_rejects_bad_query() {
    let app = TestApp::new();

    let response = app.get("/api/products?category=hat&limit=0").await;
    let errors = assert_validation_errors(&response);

    assert_eq!(
        errors,
        vec![
            (
                "limit".to_string(),
                "Limit must be between 1 and 100".to_string()
            ),
            (
                "category".to_string(),
                "Category must be one of: top, bottom, dress".to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn test_get_product_by_id() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/products/{}", products::WHITE_SHIRT))
        .await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["data"]["id"], products::WHITE_SHIRT);
    assert_eq!(json["data"]["color"], "#FFFFFF");
    assert_eq!(json["data"]["season"], "all-season");
    assert!(json["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_get_product_accepts_uppercase_id() {
    let app = TestApp::new();

    let response = app
        .get(&format!(
            "/api/products/{}",
            products::BLACK_DRESS.to_uppercase()
        ))
        .await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["data"]["id"], products::BLACK_DRESS);
}

#[tokio::test]
async fn test_get_product_errors() {
    let app = TestApp::new();

    let response = app.get("/api/products/not-an-id").await;
    let errors = assert_validation_errors(&response);
    assert_eq!(
        errors,
        vec![("id".to_string(), "Invalid product ID".to_string())]
    );

    let response = app.get(&format!("/api/products/{}", products::MISSING)).await;
    assert_api_error(&response, StatusCode::NOT_FOUND, "Product not found");
}

#[tokio::test]
async fn test_create_then_fetch() {
    let app = TestApp::new();

    let id = app
        .create_product(fixtures::product_body(
            "  Olive Field Jacket ",
            "#808000",
            "top",
            "fall",
            "casual",
        ))
        .await;
    assert_eq!(id.len(), 24);

    let response = app.get(&format!("/api/products/{id}")).await;
    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["data"]["name"], "Olive Field Jacket");
    assert_eq!(json["data"]["createdAt"], json["data"]["updatedAt"]);

    let json: Value = app.get("/api/products").await.json();
    assert_eq!(json["total"], fixtures::SEED_COUNT + 1);
    // New products are appended
    assert_eq!(
        names(&json).last().map(String::as_str),
        Some("Olive Field Jacket")
    );
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let app = TestApp::new();

    let body = json!({
        "name": "X",
        "price": -3,
        "color": "FF0000",
        "category": "hat",
        "season": "monsoon",
        "occasion": "casual",
        "image_url": "ftp://example.com/x.jpg",
    });
    let response = app.post_json("/api/products", &[], &body.to_string()).await;
    let errors = assert_validation_errors(&response);

    let fields: Vec<&str> = errors.iter().map(|(f, _)| f.as_str()).collect();
    assert_eq!(
        fields,
        vec!["name", "price", "color", "category", "material", "season", "image_url"]
    );
    assert_eq!(
        errors[2].1,
        "Color must be a valid HEX code (e.g., #FF5733)"
    );
    assert_eq!(errors[4].1, "Material is required");
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app.post_json("/api/products", &[], "{not json").await;
    assert_status(&response, StatusCode::BAD_REQUEST);

    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Malformed request"));
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_update_product() {
    let app = TestApp::new();
    let path = format!("/api/products/{}", products::CORAL_BLOUSE);

    let response = app
        .put_json(&path, &json!({"price": 45.0, "season": "summer"}).to_string())
        .await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["data"]["price"], 45.0);
    assert_eq!(json["data"]["season"], "summer");
    assert_eq!(json["data"]["name"], "Coral Pink Blouse");

    let fetched: Value = app.get(&path).await.json();
    assert_eq!(fetched["data"]["price"], 45.0);
}

#[tokio::test]
async fn test_update_validates_present_fields_only() {
    let app = TestApp::new();
    let path = format!("/api/products/{}", products::CORAL_BLOUSE);

    let response = app.put_json(&path, &json!({"color": "coral"}).to_string()).await;
    let errors = assert_validation_errors(&response);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "color");

    // Nothing changed
    let fetched: Value = app.get(&path).await.json();
    assert_eq!(fetched["data"]["color"], "#FF7F50");
}

#[tokio::test]
async fn test_update_missing_product() {
    let app = TestApp::new();

    let response = app
        .put_json(
            &format!("/api/products/{}", products::MISSING),
            &json!({"price": 1}).to_string(),
        )
        .await;
    assert_api_error(&response, StatusCode::NOT_FOUND, "Product not found");
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::new();
    let path = format!("/api/products/{}", products::RED_DRESS);

    let response = app.delete(&path).await;
    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["message"], "Product deleted successfully");

    assert_api_error(&app.get(&path).await, StatusCode::NOT_FOUND, "Product not found");
    assert_api_error(&app.delete(&path).await, StatusCode::NOT_FOUND, "Product not found");

    let json: Value = app.get("/api/products").await.json();
    assert_eq!(json["total"], fixtures::SEED_COUNT - 1);
}
