use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{CreateProduct, Product, ProductId, ProductQuery, UpdateProduct};
use crate::services::CatalogStore;

/// One page of products
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub success: bool,
    /// Products on this page
    pub count: usize,
    /// Products matching the filter across all pages
    pub total: usize,
    pub page: usize,
    pub pages: usize,
    pub data: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub data: Product,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    #[schema(example = "Product deleted successfully")]
    pub message: String,
}

/// List products with filtering and pagination
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductListResponse),
        (status = 400, description = "Invalid query parameter"),
    ),
    tag = "Products"
)]
pub async fn list_products<C: CatalogStore>(
    State(catalog): State<Arc<C>>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let Query(query) = query?;
    let (filter, pagination) = query.validate()?;

    let matching = catalog.list(&filter).await?;
    let total = matching.len();
    let data: Vec<Product> = matching
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.limit)
        .collect();

    tracing::debug!(total, page = pagination.page, count = data.len(), "Listed products");

    Ok(Json(ProductListResponse {
        success: true,
        count: data.len(),
        total,
        page: pagination.page,
        pages: pagination.pages(total),
        data,
    }))
}

/// Get a single product
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "24-character product id")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Invalid product id"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product<C: CatalogStore>(
    State(catalog): State<Arc<C>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = ProductId::parse(&id, "id")?;
    let product = catalog.get(&id).await?.ok_or(ApiError::ProductNotFound)?;
    Ok(Json(ProductResponse {
        success: true,
        data: product,
    }))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failed"),
    ),
    tag = "Products"
)]
pub async fn create_product<C: CatalogStore>(
    State(catalog): State<Arc<C>>,
    body: Result<Json<CreateProduct>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let product = Product::create(body.validate()?);
    catalog.insert(product.clone()).await?;

    tracing::info!(id = %product.id, name = %product.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            success: true,
            data: product,
        }),
    ))
}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "24-character product id")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn update_product<C: CatalogStore>(
    State(catalog): State<Arc<C>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProduct>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = ProductId::parse(&id, "id")?;
    let Json(body) = body?;
    let patch = body.validate()?;

    let product = catalog
        .update(&id, patch)
        .await?
        .ok_or(ApiError::ProductNotFound)?;

    tracing::info!(id = %product.id, "Product updated");

    Ok(Json(ProductResponse {
        success: true,
        data: product,
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "24-character product id")),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 400, description = "Invalid product id"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn delete_product<C: CatalogStore>(
    State(catalog): State<Arc<C>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = ProductId::parse(&id, "id")?;
    let removed = catalog.remove(&id).await?.ok_or(ApiError::ProductNotFound)?;

    tracing::info!(id = %removed.id, name = %removed.name, "Product deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: "Product deleted successfully".to_string(),
    }))
}
