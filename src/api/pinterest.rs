use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::validation::Checks;
use crate::models::AppConfig;
use crate::services::SearchProxy;

const LIMIT_RANGE: &str = "Limit must be between 1 and 50";

/// Request body for /api/pinterest/search
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[schema(example = "burgundy evening gown")]
    pub query: Option<String>,
    /// 1 to 50; numeric strings are accepted
    #[schema(value_type = Option<u32>, example = 20)]
    pub limit: Option<Value>,
}

/// Request body for /api/pinterest/board
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequest {
    pub board_id: Option<String>,
    #[schema(value_type = Option<u32>, example = 20)]
    pub limit: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PinterestResponse {
    pub success: bool,
    /// Upstream payload, passed through unchanged
    #[schema(value_type = Object)]
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[schema(example = "Pinterest API")]
    pub source: &'static str,
}

/// Optional `limit` as a JSON number or numeric string
fn check_limit(checks: &mut Checks, value: Option<&Value>, default: u32) -> u32 {
    let text = match value {
        None | Some(Value::Null) => return default,
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => String::new(),
    };
    checks
        .int_in_range("limit", &text, 1, 50, LIMIT_RANGE)
        .map_or(default, |n| n as u32)
}

impl SearchRequest {
    fn validate(self, default_limit: u32) -> Result<(String, u32), ApiError> {
        let mut checks = Checks::new();

        let query = match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => checks.text_len(
                "query",
                q,
                2,
                200,
                "Query must be between 2 and 200 characters",
            ),
            _ => {
                checks.fail("query", "Search query is required");
                None
            }
        };
        let limit = check_limit(&mut checks, self.limit.as_ref(), default_limit);

        match query {
            Some(query) if checks.is_ok() => Ok((query, limit)),
            _ => Err(checks.into_error()),
        }
    }
}

impl BoardRequest {
    fn validate(self, default_limit: u32) -> Result<(String, u32), ApiError> {
        let mut checks = Checks::new();
        let board_id = checks.required_text("boardId", self.board_id.as_deref(), "Board ID is required");
        let limit = check_limit(&mut checks, self.limit.as_ref(), default_limit);

        match board_id {
            Some(board_id) if checks.is_ok() => Ok((board_id, limit)),
            _ => Err(checks.into_error()),
        }
    }
}

/// Search Pinterest for fashion inspiration
#[utoipa::path(
    post,
    path = "/api/pinterest/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Upstream search results", body = PinterestResponse),
        (status = 400, description = "Validation failed"),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "PINTEREST_ACCESS_TOKEN not set"),
        (status = 502, description = "Pinterest unreachable"),
    ),
    tag = "Pinterest"
)]
pub async fn search_pins(
    State(config): State<Arc<AppConfig>>,
    State(proxy): State<Arc<SearchProxy>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<PinterestResponse>, ApiError> {
    let Json(body) = body?;
    let (query, limit) = body.validate(config.pinterest.default_limit)?;

    tracing::info!(query = %query, limit, "Pinterest search");
    let data = proxy.search_pins(&query, limit).await?;

    Ok(Json(PinterestResponse {
        success: true,
        data,
        query: Some(query),
        board_id: None,
        source: "Pinterest API",
    }))
}

/// Get pins from a Pinterest board
#[utoipa::path(
    post,
    path = "/api/pinterest/board",
    request_body = BoardRequest,
    responses(
        (status = 200, description = "Upstream board pins", body = PinterestResponse),
        (status = 400, description = "Validation failed"),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "PINTEREST_ACCESS_TOKEN not set"),
        (status = 502, description = "Pinterest unreachable"),
    ),
    tag = "Pinterest"
)]
pub async fn board_pins(
    State(config): State<Arc<AppConfig>>,
    State(proxy): State<Arc<SearchProxy>>,
    body: Result<Json<BoardRequest>, JsonRejection>,
) -> Result<Json<PinterestResponse>, ApiError> {
    let Json(body) = body?;
    let (board_id, limit) = body.validate(config.pinterest.default_limit)?;

    tracing::info!(board_id = %board_id, limit, "Pinterest board pins");
    let data = proxy.board_pins(&board_id, limit).await?;

    Ok(Json(PinterestResponse {
        success: true,
        data,
        query: None,
        board_id: Some(board_id),
        source: "Pinterest API",
    }))
}
