//! Handler tests for Products domain
//!
//! These tests drive the products router directly:
//! - Status codes and `{message, product}` / `{error, message}` bodies
//! - Bearer token enforcement on writes
//! - Store contents after each request
//!
//! Every test gets a fresh repository seeded with the sample catalogue.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

const AUTH: &str = "Bearer x";

fn app(repository: InMemoryProductRepository) -> Router {
    Router::new().nest(
        "/api/products",
        handlers::router(ProductService::new(repository)),
    )
}

fn seeded() -> (InMemoryProductRepository, Router) {
    let repository = InMemoryProductRepository::with_sample_data();
    let router = app(repository.clone());
    (repository, router)
}

fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn mouse() -> Value {
    json!({
        "name": "Mouse",
        "description": "Wireless mouse",
        "price": 25,
        "category": "Electronics"
    })
}

#[tokio::test]
async fn test_list_returns_catalogue_in_order() {
    let (_, router) = seeded();

    let (status, body) = send(&router, request("GET", "/api/products", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    let products: Vec<Product> = serde_json::from_value(body).unwrap();
    assert_eq!(products, sample_products());
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let (_, router) = seeded();

    let (_, first) = send(&router, request("GET", "/api/products", None, None)).await;
    let (_, second) = send(&router, request("GET", "/api/products", None, None)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_returns_single_product() {
    let (_, router) = seeded();

    let (status, body) = send(&router, request("GET", "/api/products/1", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "1",
            "name": "Laptop",
            "description": "High-performance laptop with 16GB RAM",
            "price": 1200,
            "category": "electronics",
            "inStock": true
        })
    );
}

#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let (_, router) = seeded();

    let (status, body) = send(&router, request("GET", "/api/products/999", None, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "error": "Product not found",
            "message": "Product with id 999 does not exist"
        })
    );
}

#[tokio::test]
async fn test_create_returns_201_with_normalized_product() {
    let (repository, router) = seeded();

    let (status, body) = send(
        &router,
        request("POST", "/api/products", Some(AUTH), Some(mouse())),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product created successfully");

    let product: Product = serde_json::from_value(body["product"].clone()).unwrap();
    assert_eq!(product.category, "electronics");
    assert!(product.in_stock);
    assert_eq!(body["product"]["price"], 25);
    assert!(sample_products().iter().all(|p| p.id != product.id));

    let stored = repository.list().await.unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored.last(), Some(&product));
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let (repository, router) = seeded();

    for _ in 0..5 {
        let (status, _) = send(
            &router,
            request("POST", "/api/products", Some(AUTH), Some(mouse())),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let mut ids: Vec<String> = repository
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[tokio::test]
async fn test_create_missing_price_returns_400() {
    let (repository, router) = seeded();

    let (status, body) = send(
        &router,
        request(
            "POST",
            "/api/products",
            Some(AUTH),
            Some(json!({
                "name": "Mouse",
                "description": "Wireless mouse",
                "category": "Electronics"
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(
        body["message"],
        "Missing required fields: name, description, price, and category are required"
    );
    assert_eq!(repository.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_with_string_price_returns_400() {
    let (_, router) = seeded();

    let mut body = mouse();
    body["price"] = json!("25");
    let (status, body) = send(
        &router,
        request("POST", "/api/products", Some(AUTH), Some(body)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a positive number");
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_400() {
    let (_, router) = seeded();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("authorization", AUTH)
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
}

#[tokio::test]
async fn test_writes_without_bearer_token_return_401_and_do_not_mutate() {
    let (repository, router) = seeded();

    let attempts = [
        request("POST", "/api/products", None, Some(mouse())),
        request("POST", "/api/products", Some("Basic abc"), Some(mouse())),
        request("PUT", "/api/products/1", None, Some(json!({"name": "Hacked"}))),
        request("PUT", "/api/products/999", Some("bearer x"), Some(json!({}))),
        request("DELETE", "/api/products/2", None, None),
        request("DELETE", "/api/products/2", Some("Token x"), None),
    ];

    for attempt in attempts {
        let (status, body) = send(&router, attempt).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({
                "error": "Unauthorized",
                "message": "Please provide a valid authorization token"
            })
        );
    }

    assert_eq!(repository.list().await.unwrap(), sample_products());
}

#[tokio::test]
async fn test_update_merges_supplied_fields_only() {
    let (repository, router) = seeded();

    let (status, body) = send(
        &router,
        request(
            "PUT",
            "/api/products/3",
            Some(AUTH),
            Some(json!({"inStock": true, "category": " Appliances ", "id": "changed"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(
        body["product"],
        json!({
            "id": "3",
            "name": "Coffee Maker",
            "description": "Programmable coffee maker with timer",
            "price": 50,
            "category": "appliances",
            "inStock": true
        })
    );

    let stored = repository.get_by_id("3").await.unwrap().unwrap();
    assert_eq!(serde_json::to_value(&stored).unwrap(), body["product"]);
    assert!(repository.get_by_id("changed").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_negative_price_returns_400_and_leaves_product_unchanged() {
    let (repository, router) = seeded();

    let (status, body) = send(
        &router,
        request("PUT", "/api/products/1", Some(AUTH), Some(json!({"price": -5}))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(
        repository.get_by_id("1").await.unwrap(),
        sample_products().into_iter().next()
    );
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let (_, router) = seeded();

    let (status, body) = send(
        &router,
        request("PUT", "/api/products/999", Some(AUTH), Some(json!({"name": "X"}))),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product with id 999 does not exist");
}

#[tokio::test]
async fn test_delete_returns_removed_product_then_get_is_404() {
    let (_, router) = seeded();

    let (status, body) = send(
        &router,
        request("DELETE", "/api/products/2", Some(AUTH), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted successfully");
    assert_eq!(body["product"]["id"], "2");
    assert_eq!(body["product"]["name"], "Smartphone");

    let (status, _) = send(&router, request("GET", "/api/products/2", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        request("DELETE", "/api/products/2", Some(AUTH), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stores_are_isolated_per_repository() {
    let (_, first) = seeded();
    let (second_repo, _) = seeded();

    send(&first, request("DELETE", "/api/products/1", Some(AUTH), None)).await;

    assert_eq!(second_repo.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_null_price_returns_400_and_leaves_product_unchanged() {
    let (repository, router) = seeded();

    let (status, body) = send(
        &router,
        request("PUT", "/api/products/1", Some(AUTH), Some(json!({"price": null}))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be a positive number");
    assert_eq!(
        repository.get_by_id("1").await.unwrap(),
        sample_products().into_iter().next()
    );
}

#[tokio::test]
async fn test_create_with_null_in_stock_is_out_of_stock() {
    let (_, router) = seeded();

    let mut body = mouse();
    body["inStock"] = Value::Null;
    let (status, body) = send(
        &router,
        request("POST", "/api/products", Some(AUTH), Some(body)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["product"]["inStock"], false);
}

#[tokio::test]
async fn test_update_with_empty_name_keeps_stored_name() {
    let (repository, router) = seeded();

    let (status, body) = send(
        &router,
        request(
            "PUT",
            "/api/products/1",
            Some(AUTH),
            Some(json!({"name": "", "description": "  "})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Laptop");
    assert_eq!(
        repository.get_by_id("1").await.unwrap(),
        sample_products().into_iter().next()
    );
}
