use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_harmony::ColorError;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Field name as sent by the client (e.g. `image_url`, `productId`)
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    #[error("Product not found")]
    ProductNotFound,

    /// Fallback for unmatched routes, carrying `METHOD PATH`
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Too many Pinterest API requests, please try again later.")]
    RateLimited,

    #[error(
        "Pinterest API is not configured. Please set PINTEREST_ACCESS_TOKEN in environment variables."
    )]
    SearchNotConfigured,

    /// Upstream non-2xx, relayed with the upstream status and message
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Pinterest API unreachable: {0}")]
    Gateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for a validation failure on a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError::new(field, message)])
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) | ApiError::InvalidColor(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ProductNotFound | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::SearchNotConfigured | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // Unknown upstream codes degrade to 502
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Gateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Client-facing summary, the `message` key of the error body.
    pub fn message(&self) -> String {
        match self {
            ApiError::Upstream { .. } | ApiError::Gateway(_) => {
                "Pinterest API request failed".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Upstream or transport detail, the `error` key of the error body.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::Upstream { .. } | ApiError::Gateway(_) => Some(self.to_string()),
            _ => None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let mut body = json!({
            "success": false,
            "status": status.as_u16(),
            "message": self.message(),
        });
        if let Some(detail) = self.detail() {
            body["error"] = json!(detail);
        }
        if let ApiError::Validation(errors) = &self {
            body["errors"] = json!(errors);
        }

        (status, Json(body)).into_response()
    }
}
