use axum::{
    http::{Method, Uri},
    response::Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Response from the /health endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    #[schema(example = "ChromaWardrobe API is running")]
    pub message: String,
    /// RFC 3339 server time
    pub timestamp: String,
    pub version: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is running", body = HealthResponse)),
    tag = "System"
)]
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "ChromaWardrobe API is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Endpoint index
#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "List of available endpoints")),
    tag = "System"
)]
pub async fn handle_api_index() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "ChromaWardrobe API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": {
                "GET /api/products": "Get all products with pagination and filtering",
                "GET /api/products/:id": "Get single product by ID",
                "POST /api/products": "Create new product",
                "PUT /api/products/:id": "Update product",
                "DELETE /api/products/:id": "Delete product",
            },
            "outfits": {
                "POST /api/outfits/suggest": "Get outfit suggestions for a product",
                "GET /api/outfits/color-compatibility/:id": "Get color compatibility info",
            },
            "pinterest": {
                "POST /api/pinterest/search": "Search Pinterest for fashion inspiration",
                "POST /api/pinterest/board": "Get pins from a Pinterest board",
            },
        },
    }))
}

/// Fallback for unknown routes
pub async fn handle_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("{} {}", method, uri.path()))
}
