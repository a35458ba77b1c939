//! color-harmony: color-theory harmonies and outfit scoring
//!
//! The crate has three layers, each building on the previous one:
//!
//! - [`color`]: hex parsing plus HSL and CIE Lab views of a [`Color`].
//! - [`harmony`]: complementary, analogous, triadic and neutral sets, and
//!   the threshold-based compatibility check.
//! - [`outfit`]: the additive scorer that ranks garments against a selected
//!   one.
//!
//! All operations are pure and synchronous. The only failure mode is a
//! malformed hex string, reported as [`ColorError::InvalidColorFormat`].
//!
//! # Quick Start
//!
//! ```
//! use color_harmony::{CatalogItem, Category, Occasion, OutfitScorer, Season};
//!
//! let shirt = CatalogItem::new("shirt", "#FF0000", Category::Top, Season::Summer, Occasion::Casual);
//! let jeans = CatalogItem::new("jeans", "#00FFFF", Category::Bottom, Season::AllSeason, Occasion::Casual);
//!
//! let report = OutfitScorer::default().suggest(&shirt, [&jeans]).unwrap();
//! assert_eq!(report.total_found, 1);
//! assert_eq!(report.suggestions[0].match_score, 100);
//! ```
//!
//! # Asymmetric compatibility
//!
//! [`are_colors_compatible`] checks the second color against the harmonies
//! of the first, so `(a, b)` and `(b, a)` may disagree. The outfit scorer
//! always passes the selected item's color first. Set
//! [`CompatibilityMode::Symmetric`] on [`ScoringRules`] to accept a pair when
//! either direction matches.

pub mod color;
pub mod error;
pub mod harmony;
pub mod outfit;


pub use color::{hex_to_hsl, hex_to_lab, hsl_to_hex, normalize_hex, Color, Hsl, Lab};
pub use error::ColorError;
pub use harmony::{
    all_compatible_hex_codes, analogous_colors, are_colors_compatible, color_distance,
    compatible_colors, complementary_color, is_neutral_color, neutral_colors, triadic_colors,
    CompatibilityMode, CompatibilityOptions, HarmonyKind, HarmonyProfile, HarmonySet,
    DEFAULT_THRESHOLD, NEUTRAL_COLORS,
};
pub use outfit::{
    CatalogItem, Category, Garment, MatchBreakdown, MatchReason, Occasion, OutfitScorer,
    OutfitSuggestion, ParseVariantError, ScoringRules, Season, SuggestionReport,
};
