//! Pairwise color compatibility.
//!
//! Two colors are compatible when either is neutral, or when the second
//! lies within `threshold` Lab units of any harmony color of the first.
//!
//! The check is directional: only the first color's harmonies are
//! consulted. [`CompatibilityMode::Symmetric`] also consults the second
//! color's harmonies, for callers that want an order-independent verdict.

use serde::{Deserialize, Serialize};

use super::sets::flatten_harmonies;
use crate::color::{Color, Lab};
use crate::error::ColorError;

/// Default Lab distance below which a color counts as matching a harmony color.
pub const DEFAULT_THRESHOLD: f64 = 30.0;

/// Which harmonies a compatibility check consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityMode {
    /// Only the first color's harmonies are matched against the second color.
    #[default]
    Directional,
    /// Compatible if either color lies near the other's harmonies.
    Symmetric,
}

/// Options for [`CompatibilityOptions::check`].
///
/// # Example
///
/// ```
/// use color_harmony::{Color, CompatibilityMode, CompatibilityOptions};
///
/// let options = CompatibilityOptions::new()
///     .threshold(25.0)
///     .mode(CompatibilityMode::Symmetric);
///
/// let red: Color = "#FF0000".parse().unwrap();
/// let cyan: Color = "#00FFFF".parse().unwrap();
/// assert!(options.check(red, cyan));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityOptions {
    /// Exclusive upper bound on Lab distance to a harmony color.
    ///
    /// Default: `30.0`
    pub threshold: f64,

    /// Default: [`CompatibilityMode::Directional`]
    pub mode: CompatibilityMode,
}

impl Default for CompatibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            mode: CompatibilityMode::Directional,
        }
    }
}

impl CompatibilityOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn mode(mut self, mode: CompatibilityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether `other` goes with `base` under these options.
    pub fn check(&self, base: Color, other: Color) -> bool {
        self.check_against(&HarmonyProfile::new(base), other)
    }

    /// Like [`check`](Self::check), reusing the precomputed harmonies of `base`.
    pub fn check_against(&self, base: &HarmonyProfile, other: Color) -> bool {
        // Neutrals go with everything, regardless of distance
        if base.neutral || other.is_neutral() {
            return true;
        }

        let other_lab = other.to_lab();
        match self.mode {
            CompatibilityMode::Directional => base.near(&other_lab, self.threshold),
            CompatibilityMode::Symmetric => {
                base.near(&other_lab, self.threshold)
                    || HarmonyProfile::new(other).near(&base.lab, self.threshold)
            }
        }
    }
}

/// A color with its harmony colors already converted to Lab.
///
/// Scoring many candidates against one garment builds this once instead of
/// regenerating the harmony sets per candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonyProfile {
    lab: Lab,
    neutral: bool,
    harmony_labs: Vec<Lab>,
}

impl HarmonyProfile {
    pub fn new(color: Color) -> Self {
        let harmony_labs = flatten_harmonies(&color.harmonies())
            .into_iter()
            .map(Color::to_lab)
            .collect();
        Self {
            lab: color.to_lab(),
            neutral: color.is_neutral(),
            harmony_labs,
        }
    }

    /// True if `lab` is strictly closer than `threshold` to any harmony color.
    fn near(&self, lab: &Lab, threshold: f64) -> bool {
        self.harmony_labs
            .iter()
            .any(|harmony| lab.distance(harmony) < threshold)
    }
}

/// Directional compatibility of two hex colors with an explicit threshold.
///
/// Returns `true` immediately if either color is neutral. Otherwise checks
/// `hex_b` against the harmonies of `hex_a` only, so swapping the arguments
/// can change the answer.
pub fn are_colors_compatible(hex_a: &str, hex_b: &str, threshold: f64) -> Result<bool, ColorError> {
    let a: Color = hex_a.parse()?;
    let b: Color = hex_b.parse()?;
    Ok(CompatibilityOptions::new().threshold(threshold).check(a, b))
}
