//! Outfit scoring and ranking.

use serde::{Deserialize, Serialize, Serializer};

use super::garment::{Category, Garment};
use crate::color::Color;
use crate::error::ColorError;
use crate::harmony::{
    CompatibilityMode, CompatibilityOptions, HarmonyProfile, DEFAULT_THRESHOLD,
};

/// Why a candidate earned points. Serializes as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchReason {
    /// Colors are compatible (+50)
    ColorHarmony,
    /// Top paired with bottom (+20)
    CategoryPairing,
    /// Seasons overlap (+15)
    SeasonMatch,
    /// Identical occasion (+15)
    SameOccasion,
}

impl MatchReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ColorHarmony => "Color harmony",
            Self::CategoryPairing => "Perfect category pairing",
            Self::SeasonMatch => "Season match",
            Self::SameOccasion => "Same occasion",
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            Self::ColorHarmony => 50,
            Self::CategoryPairing => 20,
            Self::SeasonMatch | Self::SameOccasion => 15,
        }
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Tunable scoring rules.
///
/// # Defaults
///
/// - threshold: 30 Lab units, directional compatibility
/// - min_score: 50
/// - max_suggestions: 10
/// - require_color_harmony: false. With the default gate, a top/bottom pair
///   with matching season and occasion reaches exactly 50 without any color
///   points and is suggested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub threshold: f64,
    pub compatibility: CompatibilityMode,
    pub min_score: u8,
    pub max_suggestions: usize,
    pub require_color_harmony: bool,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            compatibility: CompatibilityMode::Directional,
            min_score: 50,
            max_suggestions: 10,
            require_color_harmony: false,
        }
    }
}

impl ScoringRules {
    pub fn compatibility_options(&self) -> CompatibilityOptions {
        CompatibilityOptions::new()
            .threshold(self.threshold)
            .mode(self.compatibility)
    }
}

/// Score and reasons for one candidate, before any gate is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub match_score: u8,
    pub match_reasons: Vec<MatchReason>,
}

impl MatchBreakdown {
    fn push(&mut self, reason: MatchReason) {
        self.match_score += reason.points();
        self.match_reasons.push(reason);
    }

    pub fn has(&self, reason: MatchReason) -> bool {
        self.match_reasons.contains(&reason)
    }
}

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSuggestion<T> {
    pub item: T,
    pub match_score: u8,
    pub match_reasons: Vec<MatchReason>,
}

/// Ranked suggestions plus the count of every qualifying candidate before
/// truncation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport<T> {
    pub suggestions: Vec<OutfitSuggestion<T>>,
    pub total_found: usize,
}

/// Scores candidates against a selected garment.
#[derive(Debug, Clone, Default)]
pub struct OutfitScorer {
    rules: ScoringRules,
}

impl OutfitScorer {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Score a single pair without category filtering or gating.
    pub fn score<S, C>(&self, selected: &S, candidate: &C) -> Result<MatchBreakdown, ColorError>
    where
        S: Garment + ?Sized,
        C: Garment + ?Sized,
    {
        let base: Color = selected.color().parse()?;
        self.score_with_base(&HarmonyProfile::new(base), selected, candidate)
    }

    fn score_with_base<S, C>(
        &self,
        base: &HarmonyProfile,
        selected: &S,
        candidate: &C,
    ) -> Result<MatchBreakdown, ColorError>
    where
        S: Garment + ?Sized,
        C: Garment + ?Sized,
    {
        let other: Color = candidate.color().parse()?;
        let mut breakdown = MatchBreakdown {
            match_score: 0,
            match_reasons: Vec::with_capacity(4),
        };

        if self.rules.compatibility_options().check_against(base, other) {
            breakdown.push(MatchReason::ColorHarmony);
        }

        if matches!(
            (selected.category(), candidate.category()),
            (Category::Top, Category::Bottom) | (Category::Bottom, Category::Top)
        ) {
            breakdown.push(MatchReason::CategoryPairing);
        }

        if selected.season().overlaps(candidate.season()) {
            breakdown.push(MatchReason::SeasonMatch);
        }

        if selected.occasion() == candidate.occasion() {
            breakdown.push(MatchReason::SameOccasion);
        }

        Ok(breakdown)
    }

    fn qualifies(&self, breakdown: &MatchBreakdown) -> bool {
        breakdown.match_score >= self.rules.min_score
            && (!self.rules.require_color_harmony || breakdown.has(MatchReason::ColorHarmony))
    }

    /// Rank `candidates` against `selected`.
    ///
    /// Candidates outside the selected category's targets, or sharing the
    /// selected item's id, are skipped. Results are sorted by descending
    /// score; ties keep the order in which candidates were supplied. Any
    /// malformed color aborts the whole request.
    pub fn suggest<S, I, C>(
        &self,
        selected: &S,
        candidates: I,
    ) -> Result<SuggestionReport<C>, ColorError>
    where
        S: Garment + ?Sized,
        I: IntoIterator<Item = C>,
        C: Garment,
    {
        let base = HarmonyProfile::new(selected.color().parse()?);
        let targets = selected.category().targets();

        let mut suggestions = Vec::new();
        for candidate in candidates {
            if !targets.contains(&candidate.category()) || candidate.id() == selected.id() {
                continue;
            }

            let breakdown = self.score_with_base(&base, selected, &candidate)?;
            if self.qualifies(&breakdown) {
                suggestions.push(OutfitSuggestion {
                    item: candidate,
                    match_score: breakdown.match_score,
                    match_reasons: breakdown.match_reasons,
                });
            }
        }

        // sort_by is stable, so equal scores keep scan order
        suggestions.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        let total_found = suggestions.len();
        suggestions.truncate(self.rules.max_suggestions);

        Ok(SuggestionReport {
            suggestions,
            total_found,
        })
    }
}
