//! HSL (Hue-Saturation-Lightness) conversions

use serde::{Deserialize, Serialize};

use super::hex::Color;
use crate::error::ColorError;

/// HSL color representation
/// - h (hue): 0.0..360.0 degrees
/// - s (saturation): 0.0..=100.0 percent
/// - l (lightness): 0.0..=100.0 percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees` (may be negative), keeping s and l.
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..self
        }
    }
}

/// Wrap any hue into [0, 360).
#[inline]
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round a tiny negative remainder up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.unit_channels();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        // Achromatic: hue and saturation are both zero
        if delta == 0.0 {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        Self::new(wrap_hue(h * 60.0), s * 100.0, l * 100.0)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let h = wrap_hue(hsl.h) / 360.0;
        let s = hsl.s.clamp(0.0, 100.0) / 100.0;
        let l = hsl.l.clamp(0.0, 100.0) / 100.0;

        if s == 0.0 {
            return Color::from_unit_channels(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Color::from_unit_channels(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if 6.0 * t < 1.0 {
        p + (q - p) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        q
    } else if 3.0 * t < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Color {
    /// HSL view of this color.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }

    /// Build a color from an HSL triple. Hue wraps modulo 360; saturation and
    /// lightness clamp to 0..=100.
    #[inline]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Color::from(hsl)
    }

    /// Rotate this color's hue around the wheel, keeping s and l.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Color::from(self.to_hsl().rotate(degrees))
    }
}

/// Convert a hex color string to HSL.
///
/// Fails with [`ColorError::InvalidColorFormat`] on malformed input.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Ok(hex.parse::<Color>()?.to_hsl())
}

/// Convert an HSL triple to a `#RRGGBB` uppercase hex string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Color::from(Hsl::new(h, s, l)).to_hex()
}
