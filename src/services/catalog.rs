use crate::error::ApiError;
use crate::models::{CreateProduct, Product, ProductFilter, ProductId, ProductPatch};
use async_trait::async_trait;
use color_harmony::Category;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for product storage
///
/// Every listing preserves insertion order; the outfit scorer scans
/// candidates in that order, which decides ties.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Store a new product
    async fn insert(&self, product: Product) -> Result<(), ApiError>;

    /// Find product by id
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ApiError>;

    /// Apply a partial update, returning the updated product if it exists
    async fn update(&self, id: &ProductId, patch: ProductPatch)
        -> Result<Option<Product>, ApiError>;

    /// Remove a product, returning it if it existed
    async fn remove(&self, id: &ProductId) -> Result<Option<Product>, ApiError>;

    /// All products matching the filter
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError>;

    /// Products in any of `categories`, excluding `exclude`
    async fn candidates(
        &self,
        categories: &[Category],
        exclude: &ProductId,
    ) -> Result<Vec<Product>, ApiError>;
}

/// In-memory product storage
pub struct InMemoryCatalog {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a catalog pre-filled with the given products
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn insert(&self, product: Product) -> Result<(), ApiError> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(ApiError::Internal(format!(
                "Duplicate product id {}",
                product.id
            )));
        }
        products.push(product);
        Ok(())
    }

    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ApiError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| &p.id == id).cloned())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, ApiError> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| &p.id == id).map(|product| {
            product.apply(patch);
            product.clone()
        }))
    }

    async fn remove(&self, id: &ProductId) -> Result<Option<Product>, ApiError> {
        let mut products = self.products.write().await;
        Ok(products
            .iter()
            .position(|p| &p.id == id)
            .map(|index| products.remove(index)))
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn candidates(
        &self,
        categories: &[Category],
        exclude: &ProductId,
    ) -> Result<Vec<Product>, ApiError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| &p.id != exclude && categories.contains(&p.category))
            .cloned()
            .collect())
    }
}

/// One entry of catalog.yaml
#[derive(Debug, Deserialize)]
struct SeedEntry {
    id: Option<String>,
    name: Option<String>,
    price: Option<f64>,
    color: Option<String>,
    category: Option<String>,
    material: Option<String>,
    season: Option<String>,
    occasion: Option<String>,
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<SeedEntry>,
}

impl SeedEntry {
    fn into_product(self) -> Result<Product, ApiError> {
        let id = self
            .id
            .as_deref()
            .map(|id| ProductId::parse(id, "id"))
            .transpose()?;
        let new = CreateProduct {
            name: self.name,
            price: self.price,
            color: self.color,
            category: self.category,
            material: self.material,
            season: self.season,
            occasion: self.occasion,
            image_url: self.image_url,
        }
        .validate()?;
        Ok(match id {
            Some(id) => Product::with_id(id, new),
            None => Product::create(new),
        })
    }
}

/// Parse seed products from catalog.yaml content
///
/// Entries that fail validation, or reuse an id, are skipped with a warning.
/// A file that does not parse at all is an error.
pub fn parse_seed_catalog(content: &str) -> Result<Vec<Product>, serde_yaml::Error> {
    let file: Option<SeedFile> = serde_yaml::from_str(content)?;
    let entries = file.map(|f| f.products).unwrap_or_default();

    let mut products: Vec<Product> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let name = entry.name.clone().unwrap_or_default();
        match entry.into_product() {
            Ok(product) if products.iter().any(|p| p.id == product.id) => {
                tracing::warn!(index, id = %product.id, "Skipping seed product with duplicate id");
            }
            Ok(product) => products.push(product),
            Err(e) => {
                tracing::warn!(index, name = %name, error = %e, "Skipping invalid seed product");
            }
        }
    }

    tracing::debug!(count = products.len(), "Parsed seed catalog");
    Ok(products)
}
