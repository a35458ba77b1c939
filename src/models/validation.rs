//! Field checks shared by the request models.
//!
//! Checks never short-circuit: every failing field is collected so a client
//! sees all problems in one response.

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use color_harmony::ParseVariantError;

use crate::error::{ApiError, FieldError};

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
static HTTP_URL: OnceLock<Regex> = OnceLock::new();

/// `#RGB` or `#RRGGBB`; the leading `#` is mandatory at the API boundary.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR
        .get_or_init(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("static regex"))
        .is_match(value)
}

pub fn is_http_url(value: &str) -> bool {
    HTTP_URL
        .get_or_init(|| Regex::new(r"^https?://.+").expect("static regex"))
        .is_match(value)
}

/// Accumulates field errors.
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(value)` if nothing failed, otherwise every collected error.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ApiError> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }

    pub fn into_error(self) -> ApiError {
        ApiError::Validation(self.errors)
    }

    /// Trimmed text whose length in characters lies in `min..=max`.
    pub fn text_len(
        &mut self,
        field: &str,
        value: &str,
        min: usize,
        max: usize,
        message: &str,
    ) -> Option<String> {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if len < min || len > max {
            self.fail(field, message);
            return None;
        }
        Some(trimmed.to_string())
    }

    /// Trimmed, non-empty text.
    pub fn required_text(&mut self, field: &str, value: Option<&str>, message: &str) -> Option<String> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                self.fail(field, message);
                None
            }
        }
    }

    /// Finite and non-negative.
    pub fn price(&mut self, field: &str, value: Option<f64>, message: &str) -> Option<f64> {
        match value {
            Some(p) if p.is_finite() && p >= 0.0 => Some(p),
            _ => {
                self.fail(field, message);
                None
            }
        }
    }

    pub fn color(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        match value {
            Some(c) if is_hex_color(c) => Some(c.to_string()),
            _ => {
                self.fail(field, "Color must be a valid HEX code (e.g., #FF5733)");
                None
            }
        }
    }

    pub fn url(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        match value {
            Some(u) if is_http_url(u) => Some(u.to_string()),
            _ => {
                self.fail(field, "Image URL must be a valid URL");
                None
            }
        }
    }

    /// Category/season/occasion. A missing value reports the same
    /// allowed-values message as an unknown one.
    pub fn variant<T>(&mut self, field: &str, value: Option<&str>) -> Option<T>
    where
        T: FromStr<Err = ParseVariantError>,
    {
        match value.unwrap_or_default().parse::<T>() {
            Ok(v) => Some(v),
            Err(e) => {
                self.fail(field, e.to_string());
                None
            }
        }
    }

    /// Integer query/body parameter in `min..=max`.
    pub fn int_in_range(
        &mut self,
        field: &str,
        value: &str,
        min: i64,
        max: i64,
        message: &str,
    ) -> Option<i64> {
        match value.trim().parse::<i64>() {
            Ok(n) if (min..=max).contains(&n) => Some(n),
            _ => {
                self.fail(field, message);
                None
            }
        }
    }
}
