pub mod catalog;
pub mod rate_limiter;
pub mod search_proxy;

pub use catalog::{parse_seed_catalog, CatalogStore, InMemoryCatalog};
pub use rate_limiter::{RateLimitDecision, RateLimiter};
pub use search_proxy::SearchProxy;
