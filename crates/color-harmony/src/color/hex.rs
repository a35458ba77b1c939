//! Hex-encoded sRGB color type
//!
//! [`Color`] is the canonical representation used at every boundary of the
//! crate. HSL and Lab are derived views computed on demand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An 8-bit sRGB color.
///
/// Parses from `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive) and
/// always renders back as 6-digit uppercase `#RRGGBB`. Serializes as that
/// hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use color_harmony::Color;
    /// let coral = Color::from_u8(0xFF, 0x7F, 0x50);
    /// assert_eq!(coral.to_hex(), "#FF7F50");
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as floats in 0.0..=1.0.
    #[inline]
    pub(crate) fn unit_channels(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Build a color from float channels in 0.0..=1.0, rounding and clamping
    /// each channel to the nearest byte.
    #[inline]
    pub(crate) fn from_unit_channels(r: f64, g: f64, b: f64) -> Self {
        let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::from_u8(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Canonical `#RRGGBB` uppercase form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse a hex color string.
    ///
    /// The accepted grammar is exactly `^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$`.
    /// Whitespace and sign characters are rejected rather than trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_harmony::Color;
    ///
    /// let red: Color = "#f00".parse().unwrap();
    /// assert_eq!(red, Color::from_u8(255, 0, 0));
    ///
    /// assert!("#FFFF".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidColorFormat(s.to_string());

        let digits = s.strip_prefix('#').unwrap_or(s);
        // from_str_radix tolerates a leading '+', so check the alphabet first
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                // Shorthand: each digit doubles (0xF -> 0xFF)
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Parse and re-render a hex color in canonical uppercase 6-digit form.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    Ok(hex.parse::<Color>()?.to_hex())
}
