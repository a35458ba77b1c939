//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use color_harmony::OutfitScorer;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::assets::AssetLoader;
use crate::models::{AppConfig, Product};
use crate::services::{parse_seed_catalog, InMemoryCatalog, RateLimiter, SearchProxy};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<InMemoryCatalog>,
    pub scorer: Arc<OutfitScorer>,
    pub limiter: Arc<RateLimiter>,
    pub proxy: Arc<SearchProxy>,
    /// Explicit CORS origin; `None` allows any origin
    pub cors_origin: Option<String>,
}

impl AppState {
    /// Assemble state from already-loaded parts.
    pub fn new(
        config: AppConfig,
        products: Vec<Product>,
        access_token: Option<String>,
    ) -> anyhow::Result<Self> {
        let proxy = SearchProxy::new(&config.pinterest, access_token)?;
        Ok(Self {
            catalog: Arc::new(InMemoryCatalog::with_products(products)),
            scorer: Arc::new(OutfitScorer::new(config.outfit)),
            limiter: Arc::new(RateLimiter::new(config.pinterest.rate_limit)),
            proxy: Arc::new(proxy),
            config: Arc::new(config),
            cors_origin: None,
        })
    }

    pub fn with_cors_origin(mut self, origin: Option<String>) -> Self {
        self.cors_origin = origin.filter(|o| !o.trim().is_empty());
        self
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<InMemoryCatalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Arc<OutfitScorer> {
    fn from_ref(state: &AppState) -> Self {
        state.scorer.clone()
    }
}

impl FromRef<AppState> for Arc<SearchProxy> {
    fn from_ref(state: &AppState) -> Self {
        state.proxy.clone()
    }
}

/// Create application state from an asset loader.
///
/// Reads config.yaml and the seed catalog, plus `PINTEREST_ACCESS_TOKEN`
/// and `CORS_ORIGIN` from the environment.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);

    let catalog_yaml = asset_loader.read_catalog_string()?;
    let products = parse_seed_catalog(&catalog_yaml)
        .map_err(|e| anyhow::anyhow!("Failed to parse seed catalog: {e}"))?;
    tracing::info!(count = products.len(), "Seeded product catalog");

    let state = AppState::new(
        config,
        products,
        std::env::var("PINTEREST_ACCESS_TOKEN").ok(),
    )?
    .with_cors_origin(std::env::var("CORS_ORIGIN").ok());
    if !state.proxy.is_configured() {
        tracing::warn!("PINTEREST_ACCESS_TOKEN not set; Pinterest routes will return 500");
    }

    Ok(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let permissive = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let Some(origin) = origin else {
        return permissive;
    };
    match HeaderValue::from_str(origin) {
        // Credentials cannot be combined with wildcards
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Invalid CORS_ORIGIN, allowing any origin");
            permissive
        }
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let products = Router::new()
        .route(
            "/",
            get(api::list_products::<InMemoryCatalog>).post(api::create_product::<InMemoryCatalog>),
        )
        .route(
            "/:id",
            get(api::get_product::<InMemoryCatalog>)
                .put(api::update_product::<InMemoryCatalog>)
                .delete(api::delete_product::<InMemoryCatalog>),
        );

    let outfits = Router::new()
        .route("/suggest", post(api::suggest_outfit::<InMemoryCatalog>))
        .route(
            "/color-compatibility/:id",
            get(api::color_compatibility::<InMemoryCatalog>),
        );

    let pinterest = Router::new()
        .route("/search", post(api::search_pins))
        .route("/board", post(api::board_pins))
        .route_layer(middleware::from_fn_with_state(
            state.limiter.clone(),
            api::enforce_rate_limit,
        ));

    let cors = cors_layer(state.cors_origin.as_deref());

    Router::new()
        .route("/health", get(api::handle_health))
        .route("/api", get(api::handle_api_index))
        .nest("/api/products", products)
        .nest("/api/outfits", outfits)
        .nest("/api/pinterest", pinterest)
        .fallback(api::handle_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
