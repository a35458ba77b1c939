pub mod config;
pub mod product;
pub mod validation;

pub use config::{AppConfig, PinterestConfig, RateLimitConfig};
pub use product::{
    CreateProduct, NewProduct, Pagination, Product, ProductFilter, ProductId, ProductPatch,
    ProductQuery, UpdateProduct,
};
