//! Shared test helpers for API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use catalog_api::{AppState, build_app};
use catalog_core::config::AppConfig;
use catalog_database::{InMemoryCategoryRepository, InMemoryProductRepository};
use catalog_entity::category::Category;
use catalog_service::CatalogService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Category store, for seeding
    pub categories: Arc<InMemoryCategoryRepository>,
}

impl TestApp {
    /// Create a test application over empty in-memory stores
    pub fn new() -> Self {
        let config: AppConfig = serde_json::from_value(json!({
            "database": { "url": "postgres://unused@localhost/catalog_test" }
        }))
        .expect("Failed to build test config");

        let products = Arc::new(InMemoryProductRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let catalog = CatalogService::new(products, categories.clone(), &config.pagination);

        Self {
            router: build_app(AppState::new(config, catalog)),
            categories,
        }
    }

    /// Add a category and return it
    pub async fn create_category(&self, name: &str) -> Category {
        self.categories.insert(name).await
    }

    /// Create a product through the API and return its id
    pub async fn create_product(&self, name: &str, price: i32) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/products",
                Some(json!({ "name": name, "price": price })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

        response.body["id"]
            .as_i64()
            .expect("No id in create response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
