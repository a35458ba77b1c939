//! CIE L*a*b* conversions and distance

use serde::{Deserialize, Serialize};

use super::hex::Color;
use crate::error::ColorError;

/// D65 reference white, XYZ scaled to 0..100
const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// sRGB to XYZ matrix (D65)
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// CIE epsilon (216/24389 rounded the conventional way)
const EPSILON: f64 = 0.008856;
/// CIE kappa / 116
const KAPPA_SLOPE: f64 = 7.787;

/// CIE L*a*b* color
/// - l: 0.0..=100.0 lightness for in-gamut colors
/// - a: green (negative) to red (positive)
/// - b: blue (negative) to yellow (positive)
///
/// Components are unbounded reals; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in Lab space (CIE76 Delta E).
    ///
    /// This is a rough proportional measure, not CIEDE2000.
    #[inline]
    pub fn distance(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// sRGB gamma expansion (IEC 61966-2-1)
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

impl From<Color> for Lab {
    fn from(color: Color) -> Self {
        let linear = color.unit_channels().map(srgb_to_linear);

        let xyz = SRGB_TO_XYZ.map(|row| {
            100.0 * (row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2])
        });

        let fx = lab_f(xyz[0] / D65_WHITE[0]);
        let fy = lab_f(xyz[1] / D65_WHITE[1]);
        let fz = lab_f(xyz[2] / D65_WHITE[2]);

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl Color {
    /// Lab view of this color.
    #[inline]
    pub fn to_lab(self) -> Lab {
        Lab::from(self)
    }
}

/// Convert a hex color string to CIE Lab.
pub fn hex_to_lab(hex: &str) -> Result<Lab, ColorError> {
    Ok(hex.parse::<Color>()?.to_lab())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lab(hex: &str, l: f64, a: f64, b: f64) {
        let lab = hex_to_lab(hex).unwrap();
        assert!(
            (lab.l - l).abs() < 0.1 && (lab.a - a).abs() < 0.1 && (lab.b - b).abs() < 0.1,
            "{hex}: expected ({l}, {a}, {b}), got {lab:?}"
        );
    }

    #[test]
    fn test_black_and_white() {
        assert_lab("#000000", 0.0, 0.0, 0.0);
        assert_lab("#FFFFFF", 100.0, 0.0, 0.0);
    }

    #[test]
    fn test_primaries_reference_values() {
        assert_lab("#FF0000", 53.24, 80.09, 67.20);
        assert_lab("#00FF00", 87.73, -86.18, 83.18);
        assert_lab("#0000FF", 32.30, 79.19, -107.86);
    }

    #[test]
    fn test_grays_have_no_chroma() {
        for hex in ["#808080", "#C0C0C0", "#696969", "#D3D3D3"] {
            let lab = hex_to_lab(hex).unwrap();
            assert!(lab.a.abs() < 0.01, "{hex} a = {}", lab.a);
            assert!(lab.b.abs() < 0.01, "{hex} b = {}", lab.b);
        }
    }

    #[test]
    fn test_mid_gray_lightness() {
        // sRGB 119 is very close to L* = 50
        let lab = Color::from_u8(119, 119, 119).to_lab();
        assert!((lab.l - 50.0).abs() < 0.5, "got {}", lab.l);
    }

    #[test]
    fn test_distance_identity_and_symmetry() {
        let red = hex_to_lab("#FF0000").unwrap();
        let navy = hex_to_lab("#000080").unwrap();

        assert_eq!(red.distance(&red), 0.0);
        assert_eq!(red.distance(&navy), navy.distance(&red));
        assert!(red.distance(&navy) > 0.0);
    }

    #[test]
    fn test_distance_black_white_is_100() {
        let black = hex_to_lab("#000").unwrap();
        let white = hex_to_lab("#FFF").unwrap();
        assert!((black.distance(&white) - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_hex_to_lab_rejects_malformed() {
        assert!(hex_to_lab("#GG0000").is_err());
    }
}
