use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use color_harmony::{compatible_colors, Category, HarmonySet, MatchReason, OutfitScorer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{Product, ProductId};
use crate::services::CatalogStore;

/// Request body for /api/outfits/suggest
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    /// Id of the garment to build an outfit around
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e501")]
    pub product_id: Option<String>,
}

/// Summary of the garment suggestions were computed for
#[derive(Debug, Serialize, ToSchema)]
pub struct SelectedProduct {
    #[schema(value_type = String)]
    pub id: ProductId,
    pub name: String,
    #[schema(value_type = String)]
    pub category: Category,
    pub color: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionEntry {
    pub product: Product,
    /// 0 to 100
    pub match_score: u8,
    /// Labels of the bonuses that were awarded
    #[schema(value_type = Vec<String>, example = json!(["Color harmony", "Season match"]))]
    pub match_reasons: Vec<MatchReason>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub success: bool,
    pub selected_product: SelectedProduct,
    /// Best matches first, at most the configured maximum
    pub suggestions: Vec<SuggestionEntry>,
    /// Qualifying candidates before truncation
    pub total_found: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductColor {
    #[schema(value_type = String)]
    pub id: ProductId,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorCompatibilityResponse {
    pub success: bool,
    pub product: ProductColor,
    /// complementary, analogous, triadic and neutral sets, in that order
    #[schema(value_type = Vec<Object>)]
    pub color_harmonies: [HarmonySet; 4],
}

/// Suggest garments that complete an outfit
///
/// Tops are paired with bottoms and dresses, bottoms with tops and dresses,
/// and dresses with other dresses. Candidates are scored on color harmony
/// (50), top/bottom pairing (20), season (15) and occasion (15).
#[utoipa::path(
    post,
    path = "/api/outfits/suggest",
    request_body = SuggestRequest,
    responses(
        (status = 200, description = "Ranked suggestions", body = SuggestResponse),
        (status = 400, description = "Invalid product id or stored color"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Outfits"
)]
pub async fn suggest_outfit<C: CatalogStore>(
    State(catalog): State<Arc<C>>,
    State(scorer): State<Arc<OutfitScorer>>,
    body: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let Json(body) = body?;
    let id = ProductId::parse(body.product_id.as_deref().unwrap_or_default(), "productId")?;

    let selected = catalog.get(&id).await?.ok_or(ApiError::ProductNotFound)?;
    let candidates = catalog
        .candidates(selected.category.targets(), &selected.id)
        .await?;
    let scanned = candidates.len();

    let report = scorer.suggest(&selected, candidates)?;

    tracing::debug!(
        product_id = %selected.id,
        category = %selected.category,
        scanned,
        total_found = report.total_found,
        "Scored outfit candidates"
    );

    Ok(Json(SuggestResponse {
        success: true,
        selected_product: SelectedProduct {
            id: selected.id,
            name: selected.name,
            category: selected.category,
            color: selected.color,
        },
        suggestions: report
            .suggestions
            .into_iter()
            .map(|s| SuggestionEntry {
                product: s.item,
                match_score: s.match_score,
                match_reasons: s.match_reasons,
            })
            .collect(),
        total_found: report.total_found,
    }))
}

/// Harmony sets for a product's color
#[utoipa::path(
    get,
    path = "/api/outfits/color-compatibility/{id}",
    params(("id" = String, Path, description = "24-character product id")),
    responses(
        (status = 200, description = "Harmony sets", body = ColorCompatibilityResponse),
        (status = 400, description = "Invalid product id"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Outfits"
)]
pub async fn color_compatibility<C: CatalogStore>(
    State(catalog): State<Arc<C>>,
    Path(id): Path<String>,
) -> Result<Json<ColorCompatibilityResponse>, ApiError> {
    let id = ProductId::parse(&id, "id")?;
    let product = catalog.get(&id).await?.ok_or(ApiError::ProductNotFound)?;
    let color_harmonies = compatible_colors(&product.color)?;

    Ok(Json(ColorCompatibilityResponse {
        success: true,
        product: ProductColor {
            id: product.id,
            name: product.name,
            color: product.color,
        },
        color_harmonies,
    }))
}
