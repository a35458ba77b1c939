//! Harmony sets: complementary, analogous, triadic and neutral colors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ColorError;

/// The fixed neutral catalog, in display order.
pub const NEUTRAL_COLORS: [Color; 10] = [
    Color::from_u8(0x00, 0x00, 0x00), // Black
    Color::from_u8(0xFF, 0xFF, 0xFF), // White
    Color::from_u8(0x80, 0x80, 0x80), // Gray
    Color::from_u8(0xC0, 0xC0, 0xC0), // Silver
    Color::from_u8(0x69, 0x69, 0x69), // Dim Gray
    Color::from_u8(0xD3, 0xD3, 0xD3), // Light Gray
    Color::from_u8(0xF5, 0xF5, 0xDC), // Beige
    Color::from_u8(0xFA, 0xEB, 0xD7), // Antique White
    Color::from_u8(0x2F, 0x4F, 0x4F), // Dark Slate Gray
    Color::from_u8(0x70, 0x80, 0x90), // Slate Gray
];

/// Saturation (percent) below which any hue counts as neutral.
const NEUTRAL_MAX_SATURATION: f64 = 15.0;
/// Beige/brown hue band that tolerates more saturation.
const EARTH_HUE_RANGE: std::ops::RangeInclusive<f64> = 20.0..=40.0;
const EARTH_MAX_SATURATION: f64 = 40.0;

/// Color-theory relationship a [`HarmonySet`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// 180 degrees across the wheel
    Complementary,
    /// ±30 degrees
    Analogous,
    /// 120 and 240 degrees
    Triadic,
    /// Fixed catalog of neutrals, independent of input
    Neutral,
}

impl HarmonyKind {
    /// All kinds in the order [`compatible_colors`] returns them.
    pub const ALL: [HarmonyKind; 4] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged group of colors that harmonize with some base color.
///
/// Serializes as `{"type": "...", "colors": ["#RRGGBB", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonySet {
    #[serde(rename = "type")]
    pub kind: HarmonyKind,
    pub colors: Vec<Color>,
}

impl Color {
    /// Hue rotated by 180 degrees.
    pub fn complement(self) -> Color {
        self.rotate_hue(180.0)
    }

    /// Hues at +30 and -30 degrees, in that order.
    pub fn analogous(self) -> [Color; 2] {
        let hsl = self.to_hsl();
        [Color::from(hsl.rotate(30.0)), Color::from(hsl.rotate(-30.0))]
    }

    /// Hues at +120 and +240 degrees, in that order.
    pub fn triadic(self) -> [Color; 2] {
        let hsl = self.to_hsl();
        [Color::from(hsl.rotate(120.0)), Color::from(hsl.rotate(240.0))]
    }

    /// Heuristic neutral classifier: very low saturation, or a muted hue in
    /// the beige/brown band.
    ///
    /// This is not a distance check against [`NEUTRAL_COLORS`].
    pub fn is_neutral(self) -> bool {
        let hsl = self.to_hsl();
        hsl.s < NEUTRAL_MAX_SATURATION
            || (EARTH_HUE_RANGE.contains(&hsl.h) && hsl.s < EARTH_MAX_SATURATION)
    }

    /// Euclidean distance between the Lab views of two colors.
    pub fn distance(self, other: Color) -> f64 {
        self.to_lab().distance(&other.to_lab())
    }

    /// The four harmony sets for this color.
    pub fn harmonies(self) -> [HarmonySet; 4] {
        [
            HarmonySet {
                kind: HarmonyKind::Complementary,
                colors: vec![self.complement()],
            },
            HarmonySet {
                kind: HarmonyKind::Analogous,
                colors: self.analogous().to_vec(),
            },
            HarmonySet {
                kind: HarmonyKind::Triadic,
                colors: self.triadic().to_vec(),
            },
            HarmonySet {
                kind: HarmonyKind::Neutral,
                colors: NEUTRAL_COLORS.to_vec(),
            },
        ]
    }
}

/// Flatten harmony sets into one list, dropping duplicates while keeping the
/// first occurrence order.
pub fn flatten_harmonies(sets: &[HarmonySet]) -> Vec<Color> {
    let mut flat: Vec<Color> = Vec::with_capacity(sets.iter().map(|s| s.colors.len()).sum());
    for color in sets.iter().flat_map(|s| s.colors.iter()) {
        if !flat.contains(color) {
            flat.push(*color);
        }
    }
    flat
}

/// Complementary color of `hex` as `#RRGGBB`.
pub fn complementary_color(hex: &str) -> Result<String, ColorError> {
    Ok(hex.parse::<Color>()?.complement().to_hex())
}

/// Analogous colors of `hex`: +30 degrees first, -30 degrees second.
pub fn analogous_colors(hex: &str) -> Result<[String; 2], ColorError> {
    Ok(hex.parse::<Color>()?.analogous().map(Color::to_hex))
}

/// Triadic colors of `hex`: +120 degrees first, +240 degrees second.
pub fn triadic_colors(hex: &str) -> Result<[String; 2], ColorError> {
    Ok(hex.parse::<Color>()?.triadic().map(Color::to_hex))
}

/// The fixed neutral catalog as hex strings.
pub fn neutral_colors() -> [String; 10] {
    NEUTRAL_COLORS.map(Color::to_hex)
}

/// Whether `hex` classifies as a neutral. See [`Color::is_neutral`].
pub fn is_neutral_color(hex: &str) -> Result<bool, ColorError> {
    Ok(hex.parse::<Color>()?.is_neutral())
}

/// Euclidean Lab distance between two hex colors. Zero for identical colors,
/// symmetric, roughly 0..=100 for sRGB inputs.
pub fn color_distance(hex_a: &str, hex_b: &str) -> Result<f64, ColorError> {
    let a: Color = hex_a.parse()?;
    let b: Color = hex_b.parse()?;
    Ok(a.distance(b))
}

/// Complementary, analogous, triadic and neutral sets, always in that order.
pub fn compatible_colors(hex: &str) -> Result<[HarmonySet; 4], ColorError> {
    Ok(hex.parse::<Color>()?.harmonies())
}

/// Every harmony color of `hex` as uppercase hex, without duplicates.
pub fn all_compatible_hex_codes(hex: &str) -> Result<Vec<String>, ColorError> {
    let sets = compatible_colors(hex)?;
    Ok(flatten_harmonies(&sets)
        .into_iter()
        .map(Color::to_hex)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complementary_primaries() {
        assert_eq!(complementary_color("#FF0000").unwrap(), "#00FFFF");
        assert_eq!(complementary_color("#00FF00").unwrap(), "#FF00FF");
        assert_eq!(complementary_color("#0000FF").unwrap(), "#FFFF00");
    }

    #[test]
    fn test_complementary_of_gray_is_itself() {
        // Achromatic colors have no hue to rotate
        assert_eq!(complementary_color("#808080").unwrap(), "#808080");
    }

    /// Half-way channel values (127.5) may round either way.
    fn assert_close(actual: &str, expected: &str) {
        let a: Color = actual.parse().unwrap();
        let e: Color = expected.parse().unwrap();
        let off = a
            .to_bytes()
            .iter()
            .zip(e.to_bytes())
            .map(|(x, y)| (*x as i16 - y as i16).abs())
            .max()
            .unwrap_or(0);
        assert!(off <= 1, "expected ~{expected}, got {actual}");
    }

    #[test]
    fn test_analogous_order() {
        // Red: +30 is orange, -30 (330) is rose
        let [plus, minus] = analogous_colors("#FF0000").unwrap();
        assert_close(&plus, "#FF8000");
        assert_close(&minus, "#FF0080");
    }

    #[test]
    fn test_triadic_order() {
        assert_eq!(
            triadic_colors("#FF0000").unwrap(),
            ["#00FF00".to_string(), "#0000FF".to_string()]
        );
    }

    #[test]
    fn test_neutral_colors_fixed() {
        assert_eq!(
            neutral_colors(),
            [
                "#000000", "#FFFFFF", "#808080", "#C0C0C0", "#696969", "#D3D3D3", "#F5F5DC",
                "#FAEBD7", "#2F4F4F", "#708090"
            ]
            .map(String::from)
        );
    }

    #[test]
    fn test_is_neutral_low_saturation() {
        assert!(is_neutral_color("#000000").unwrap());
        assert!(is_neutral_color("#FFFFFF").unwrap());
        assert!(is_neutral_color("#808080").unwrap());
        // Slate gray: hue 210, saturation ~12.6
        assert!(is_neutral_color("#708090").unwrap());
    }

    #[test]
    fn test_is_neutral_earth_band() {
        // Tan: hue 34, saturation ~43.7 -> outside the earth band's saturation cap
        assert!(!is_neutral_color("#D2B48C").unwrap());
        // Khaki-brown: hue ~30, saturation ~25
        assert!(is_neutral_color("#A08060").unwrap());
    }

    #[test]
    fn test_is_neutral_saturated_colors() {
        assert!(!is_neutral_color("#FF0000").unwrap());
        assert!(!is_neutral_color("#000080").unwrap());
        assert!(!is_neutral_color("#228B22").unwrap());
        // Beige has hue 60, outside the earth band, and saturation ~56
        assert!(!is_neutral_color("#F5F5DC").unwrap());
    }

    #[test]
    fn test_color_distance_identity() {
        assert_eq!(color_distance("#FF7F50", "#ff7f50").unwrap(), 0.0);
        assert_eq!(color_distance("#FFF", "#FFFFFF").unwrap(), 0.0);
    }

    #[test]
    fn test_color_distance_rejects_malformed() {
        assert!(matches!(
            color_distance("#FF0000", "FF00"),
            Err(ColorError::InvalidColorFormat(s)) if s == "FF00"
        ));
    }

    #[test]
    fn test_compatible_colors_order_and_sizes() {
        let sets = compatible_colors("#FF7F50").unwrap();
        let kinds: Vec<HarmonyKind> = sets.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, HarmonyKind::ALL.to_vec());

        let sizes: Vec<usize> = sets.iter().map(|s| s.colors.len()).collect();
        assert_eq!(sizes, vec![1, 2, 2, 10]);
    }

    #[test]
    fn test_harmony_set_serializes_with_type_tag() {
        let sets = compatible_colors("#FF0000").unwrap();
        let json = serde_json::to_value(&sets[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "complementary", "colors": ["#00FFFF"]})
        );
    }

    #[test]
    fn test_all_compatible_hex_codes_deduplicates() {
        // For gray every rotation returns gray itself, and gray is also in the
        // neutral catalog, so it must appear exactly once.
        let codes = all_compatible_hex_codes("#808080").unwrap();
        assert_eq!(codes.iter().filter(|c| *c == "#808080").count(), 1);
        assert_eq!(codes.len(), 10);

        // Red has five distinct rotations plus ten neutrals
        let codes = all_compatible_hex_codes("#f00").unwrap();
        assert_eq!(codes.len(), 15);
        assert!(codes.iter().all(|c| *c == c.to_uppercase()));
    }
}
