//! Authenticated pass-through to the Pinterest v5 API.

use crate::error::ApiError;
use crate::models::PinterestConfig;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

pub struct SearchProxy {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl SearchProxy {
    /// Build a proxy; without a token every call fails with `SearchNotConfigured`.
    pub fn new(config: &PinterestConfig, access_token: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("chroma-wardrobe/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.access_token.is_some()
    }

    /// `GET {base}/v5/search/pins?query=..&limit=..`
    pub async fn search_pins(&self, query: &str, limit: u32) -> Result<Value, ApiError> {
        let url = self.endpoint(&["v5", "search", "pins"])?;
        let limit = limit.to_string();
        self.fetch(url, &[("query", query), ("limit", &limit)]).await
    }

    /// `GET {base}/v5/boards/{board_id}/pins?page_size=..`
    pub async fn board_pins(&self, board_id: &str, page_size: u32) -> Result<Value, ApiError> {
        let url = self.endpoint(&["v5", "boards", board_id, "pins"])?;
        let page_size = page_size.to_string();
        self.fetch(url, &[("page_size", &page_size)]).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Internal(format!("Invalid Pinterest base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Internal("Pinterest base URL cannot have a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(&self, url: Url, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(ApiError::SearchNotConfigured)?;

        tracing::debug!(url = %url, "Forwarding request to Pinterest");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Gateway(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Gateway(e.to_string()))?;

        if !status.is_success() {
            let message = upstream_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), %message, "Pinterest returned an error");
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Gateway(format!("Invalid JSON from Pinterest: {e}")))
    }
}

/// The upstream `message` field, else the raw body text
fn upstream_message(body: &str) -> Option<String> {
    let from_json = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string));
    from_json.or_else(|| {
        let text = body.trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}
