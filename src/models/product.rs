use chrono::{DateTime, Utc};
use color_harmony::{Category, Garment, Occasion, Season};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use super::validation::Checks;
use crate::error::ApiError;

const INVALID_ID: &str = "Invalid product ID";
const NAME_REQUIRED: &str = "Product name is required";
const NAME_LENGTH: &str = "Product name must be between 2 and 100 characters";
const PRICE: &str = "Price must be a positive number";
const MATERIAL_REQUIRED: &str = "Material is required";

/// Product identifier: 24 lowercase hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        use rand::Rng;
        let bytes: [u8; 12] = rand::thread_rng().gen();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Parse a client-supplied id. Uppercase hex is accepted and normalized.
    pub fn parse(s: &str, field: &str) -> Result<Self, ApiError> {
        if s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(ApiError::field(field, INVALID_ID))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// 24-character hex identifier
    #[schema(value_type = String, example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// `#RGB` or `#RRGGBB`, stored as submitted
    #[schema(example = "#FF5733")]
    pub color: String,
    #[schema(value_type = String, example = "top")]
    pub category: Category,
    pub material: String,
    #[schema(value_type = String, example = "all-season")]
    pub season: Season,
    #[schema(value_type = String, example = "casual")]
    pub occasion: Occasion,
    pub image_url: String,
    #[serde(rename = "createdAt")]
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a stored product from validated input with a fresh id.
    pub fn create(new: NewProduct) -> Self {
        Self::with_id(ProductId::generate(), new)
    }

    /// Build a stored product under a known id (seed data).
    pub fn with_id(id: ProductId, new: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: new.name,
            price: new.price,
            color: new.color,
            category: new.category,
            material: new.material,
            season: new.season,
            occasion: new.occasion,
            image_url: new.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated partial update and bump `updated_at`.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(material) = patch.material {
            self.material = material;
        }
        if let Some(season) = patch.season {
            self.season = season;
        }
        if let Some(occasion) = patch.occasion {
            self.occasion = occasion;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        self.updated_at = Utc::now();
    }
}

impl Garment for Product {
    fn id(&self) -> &str {
        self.id.as_str()
    }
    fn color(&self) -> &str {
        &self.color
    }
    fn category(&self) -> Category {
        self.category
    }
    fn season(&self) -> Season {
        self.season
    }
    fn occasion(&self) -> Occasion {
        self.occasion
    }
}

/// Request body for creating a product
///
/// Every field is optional at the JSON level so that missing fields are
/// reported alongside invalid ones.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Classic White Button-Up Shirt")]
    pub name: Option<String>,
    #[schema(example = 49.99)]
    pub price: Option<f64>,
    #[schema(example = "#FFFFFF")]
    pub color: Option<String>,
    #[schema(example = "top")]
    pub category: Option<String>,
    #[schema(example = "Cotton")]
    pub material: Option<String>,
    #[schema(example = "all-season")]
    pub season: Option<String>,
    #[schema(example = "business")]
    pub occasion: Option<String>,
    #[schema(example = "https://images.example.com/shirt.jpg")]
    pub image_url: Option<String>,
}

/// Fully validated product fields
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub color: String,
    pub category: Category,
    pub material: String,
    pub season: Season,
    pub occasion: Occasion,
    pub image_url: String,
}

impl CreateProduct {
    pub fn validate(self) -> Result<NewProduct, ApiError> {
        let mut checks = Checks::new();

        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => checks.text_len("name", n, 2, 100, NAME_LENGTH),
            _ => {
                checks.fail("name", NAME_REQUIRED);
                None
            }
        };
        let price = checks.price("price", self.price, PRICE);
        let color = checks.color("color", self.color.as_deref());
        let category = checks.variant("category", self.category.as_deref());
        let material = checks.required_text("material", self.material.as_deref(), MATERIAL_REQUIRED);
        let season = checks.variant("season", self.season.as_deref());
        let occasion = checks.variant("occasion", self.occasion.as_deref());
        let image_url = checks.url("image_url", self.image_url.as_deref());

        match (name, price, color, category, material, season, occasion, image_url) {
            (
                Some(name),
                Some(price),
                Some(color),
                Some(category),
                Some(material),
                Some(season),
                Some(occasion),
                Some(image_url),
            ) => Ok(NewProduct {
                name,
                price,
                color,
                category,
                material,
                season,
                occasion,
                image_url,
            }),
            _ => Err(checks.into_error()),
        }
    }
}

/// Request body for a partial product update
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub color: Option<String>,
    pub category: Option<String>,
    pub material: Option<String>,
    pub season: Option<String>,
    pub occasion: Option<String>,
    pub image_url: Option<String>,
}

/// Validated partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub color: Option<String>,
    pub category: Option<Category>,
    pub material: Option<String>,
    pub season: Option<Season>,
    pub occasion: Option<Occasion>,
    pub image_url: Option<String>,
}

impl UpdateProduct {
    /// Validate only the fields that are present.
    pub fn validate(self) -> Result<ProductPatch, ApiError> {
        let mut checks = Checks::new();
        let mut patch = ProductPatch::default();

        if let Some(name) = self.name.as_deref() {
            patch.name = checks.text_len("name", name, 2, 100, NAME_LENGTH);
        }
        if self.price.is_some() {
            patch.price = checks.price("price", self.price, PRICE);
        }
        if self.color.is_some() {
            patch.color = checks.color("color", self.color.as_deref());
        }
        if self.category.is_some() {
            patch.category = checks.variant("category", self.category.as_deref());
        }
        if self.material.is_some() {
            patch.material =
                checks.required_text("material", self.material.as_deref(), MATERIAL_REQUIRED);
        }
        if self.season.is_some() {
            patch.season = checks.variant("season", self.season.as_deref());
        }
        if self.occasion.is_some() {
            patch.occasion = checks.variant("occasion", self.occasion.as_deref());
        }
        if self.image_url.is_some() {
            patch.image_url = checks.url("image_url", self.image_url.as_deref());
        }

        checks.finish(|| patch)
    }
}

/// Query string for listing products
///
/// Values arrive as strings and are checked here so a bad number yields a
/// field error instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Page number, starting at 1 (default 1)
    pub page: Option<String>,
    /// Page size, 1 to 100 (default 20)
    pub limit: Option<String>,
    /// top, bottom or dress
    pub category: Option<String>,
    /// spring, summer, fall, winter or all-season
    pub season: Option<String>,
    /// casual, formal, business, party or athletic
    pub occasion: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

/// Validated listing filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<Category>,
    pub season: Option<Season>,
    pub occasion: Option<Occasion>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |c| product.category == c)
            && self.season.map_or(true, |s| product.season == s)
            && self.occasion.map_or(true, |o| product.occasion == o)
            && self.min_price.map_or(true, |min| product.price >= min)
            && self.max_price.map_or(true, |max| product.price <= max)
    }
}

/// Page selection for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl Pagination {
    /// Items to skip. Saturates, so an absurd page lands past the end.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` items.
    pub fn pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

impl ProductQuery {
    pub fn validate(self) -> Result<(ProductFilter, Pagination), ApiError> {
        let mut checks = Checks::new();
        let mut filter = ProductFilter::default();
        let mut pagination = Pagination::default();

        if let Some(page) = self.page.as_deref() {
            if let Some(p) = checks.int_in_range("page", page, 1, i64::MAX, "Page must be a positive integer") {
                pagination.page = p as usize;
            }
        }
        if let Some(limit) = self.limit.as_deref() {
            if let Some(l) = checks.int_in_range("limit", limit, 1, 100, "Limit must be between 1 and 100") {
                pagination.limit = l as usize;
            }
        }
        if self.category.is_some() {
            filter.category = checks.variant("category", self.category.as_deref());
        }
        if self.season.is_some() {
            filter.season = checks.variant("season", self.season.as_deref());
        }
        if self.occasion.is_some() {
            filter.occasion = checks.variant("occasion", self.occasion.as_deref());
        }
        if let Some(min) = self.min_price.as_deref() {
            filter.min_price = checks.price(
                "minPrice",
                min.trim().parse().ok(),
                "minPrice must be a positive number",
            );
        }
        if let Some(max) = self.max_price.as_deref() {
            filter.max_price = checks.price(
                "maxPrice",
                max.trim().parse().ok(),
                "maxPrice must be a positive number",
            );
        }

        checks.finish(|| (filter, pagination))
    }
}
