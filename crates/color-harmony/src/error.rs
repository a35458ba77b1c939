//! Error type for color parsing.

use thiserror::Error;

/// The only failure the color core can produce: an input that is not a
/// 3- or 6-digit hex color (with or without a leading `#`).
///
/// Everything downstream of parsing (harmonies, distance, scoring) is total
/// over valid colors, so this is the single error kind callers have to map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format: {0:?} (expected #RGB or #RRGGBB)")]
    InvalidColorFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_format_message() {
        let error = ColorError::InvalidColorFormat("#GGG".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid color format: \"#GGG\" (expected #RGB or #RRGGBB)"
        );
    }
}
