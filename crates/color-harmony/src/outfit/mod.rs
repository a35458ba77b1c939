//! Outfit scoring
//!
//! Given a selected garment and a pool of candidates, the [`OutfitScorer`]
//! awards points per candidate and returns the best matches.
//!
//! | Stage | Points | Condition |
//! |-------|--------|-----------|
//! | Color harmony | 50 | colors compatible (threshold 30) |
//! | Category pairing | 20 | top with bottom, either way round |
//! | Season match | 15 | same season, or either is all-season |
//! | Same occasion | 15 | identical occasion |
//!
//! Only candidates in the selected category's target set are scored: tops
//! and bottoms look at each other and at dresses, dresses only at dresses.

mod garment;
mod scorer;

pub use garment::{CatalogItem, Category, Garment, Occasion, ParseVariantError, Season};
pub use scorer::{
    MatchBreakdown, MatchReason, OutfitScorer, OutfitSuggestion, ScoringRules, SuggestionReport,
};
