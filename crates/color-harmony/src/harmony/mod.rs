//! Color harmony engine
//!
//! Builds the four harmony sets for a base color and decides whether two
//! colors go together.
//!
//! | Kind | Hue offsets | Colors |
//! |------|-------------|--------|
//! | complementary | +180 | 1 |
//! | analogous | +30, -30 | 2 |
//! | triadic | +120, +240 | 2 |
//! | neutral | fixed catalog | 10 |
//!
//! Saturation and lightness are carried over unchanged for the rotated sets.
//! Distances are Euclidean in CIE Lab.

mod compatibility;
mod sets;

pub use compatibility::{
    are_colors_compatible, CompatibilityMode, CompatibilityOptions, HarmonyProfile,
    DEFAULT_THRESHOLD,
};
pub use sets::{
    all_compatible_hex_codes, analogous_colors, color_distance, compatible_colors,
    complementary_color, flatten_harmonies, is_neutral_color, neutral_colors, triadic_colors,
    HarmonyKind, HarmonySet, NEUTRAL_COLORS,
};
