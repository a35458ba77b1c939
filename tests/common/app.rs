//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use chroma_wardrobe::assets::AssetLoader;
use chroma_wardrobe::models::{AppConfig, PinterestConfig, RateLimitConfig};
use chroma_wardrobe::server::{build_router, AppState};
use chroma_wardrobe::services::{parse_seed_catalog, InMemoryCatalog};

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub catalog: Arc<InMemoryCatalog>,
}

impl TestApp {
    /// Create a new test application with the embedded seed catalog,
    /// default config and no Pinterest token
    pub fn new() -> Self {
        Self::from_state(Self::create_state(AppConfig::default(), None))
    }

    /// Test application whose Pinterest proxy points at `base_url`
    pub fn with_pinterest(base_url: &str, token: Option<&str>, max_requests: u32) -> Self {
        let config = AppConfig {
            pinterest: PinterestConfig {
                base_url: base_url.to_string(),
                rate_limit: RateLimitConfig {
                    max_requests,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        Self::from_state(Self::create_state(config, token.map(str::to_string)))
    }

    /// Test application with custom config and the embedded seed catalog
    pub fn with_config(config: AppConfig) -> Self {
        Self::from_state(Self::create_state(config, None))
    }

    /// Application state over the embedded seed catalog
    pub fn create_state(config: AppConfig, access_token: Option<String>) -> AppState {
        let loader = AssetLoader::new(None, None);
        let yaml = loader.read_catalog_string().expect("embedded catalog");
        let products = parse_seed_catalog(&yaml).expect("valid seed catalog");
        AppState::new(config, products, access_token).expect("Failed to create app state")
    }

    pub fn from_state(state: AppState) -> Self {
        let catalog = state.catalog.clone();
        Self {
            router: build_router(state),
            catalog,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a GET request with custom headers
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::get(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> TestResponse {
        let mut builder = Request::post(path).header("Content-Type", "application/json");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            Request::put(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a product and return its id
    pub async fn create_product(&self, body: serde_json::Value) -> String {
        let response = self.post_json("/api/products", &[], &body.to_string()).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "create failed: {}",
            response.text()
        );
        let json: serde_json::Value = response.json();
        json["data"]["id"].as_str().unwrap().to_string()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
