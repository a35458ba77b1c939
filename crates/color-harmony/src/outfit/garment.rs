//! Catalog metadata the scorer reads: category, season, occasion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a category/season/occasion string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be one of: {allowed}")]
pub struct ParseVariantError {
    pub field: &'static str,
    pub allowed: &'static str,
    pub value: String,
}

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Comma-separated list of accepted spellings.
            pub const ALLOWED: &'static str = concat_labels!($($label),+);

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(ParseVariantError {
                        field: $field,
                        allowed: Self::ALLOWED,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

macro_rules! concat_labels {
    ($first:literal $(, $rest:literal)*) => {
        concat!($first $(, ", ", $rest)*)
    };
}

catalog_enum! {
    /// Garment category.
    Category, "Category" {
        Top => "top",
        Bottom => "bottom",
        Dress => "dress",
    }
}

catalog_enum! {
    /// Season a garment is meant for.
    Season, "Season" {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
        AllSeason => "all-season",
    }
}

catalog_enum! {
    /// Occasion a garment is meant for.
    Occasion, "Occasion" {
        Casual => "casual",
        Formal => "formal",
        Business => "business",
        Party => "party",
        Athletic => "athletic",
    }
}

impl Category {
    /// Categories worth suggesting alongside this one.
    ///
    /// Dresses are complete outfits, so they only pair with other dresses.
    pub fn targets(self) -> &'static [Category] {
        match self {
            Category::Top => &[Category::Bottom, Category::Dress],
            Category::Bottom => &[Category::Top, Category::Dress],
            Category::Dress => &[Category::Dress],
        }
    }
}

impl Season {
    /// Same season, or either side is all-season.
    pub fn overlaps(self, other: Season) -> bool {
        self == other || self == Season::AllSeason || other == Season::AllSeason
    }
}

/// A catalog record as seen by the scorer.
///
/// The core never mutates garments; it only reads these five fields.
pub trait Garment {
    /// Identity used to exclude the selected item from its own suggestions.
    fn id(&self) -> &str;
    /// Hex color string, parsed when scored.
    fn color(&self) -> &str;
    fn category(&self) -> Category;
    fn season(&self) -> Season;
    fn occasion(&self) -> Occasion;
}

impl<T: Garment + ?Sized> Garment for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
    fn color(&self) -> &str {
        (**self).color()
    }
    fn category(&self) -> Category {
        (**self).category()
    }
    fn season(&self) -> Season {
        (**self).season()
    }
    fn occasion(&self) -> Occasion {
        (**self).occasion()
    }
}

/// Minimal owned garment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub color: String,
    pub category: Category,
    pub season: Season,
    pub occasion: Occasion,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        category: Category,
        season: Season,
        occasion: Occasion,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            category,
            season,
            occasion,
        }
    }
}

impl Garment for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn color(&self) -> &str {
        &self.color
    }
    fn category(&self) -> Category {
        self.category
    }
    fn season(&self) -> Season {
        self.season
    }
    fn occasion(&self) -> Occasion {
        self.occasion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_targets() {
        assert_eq!(Category::Top.targets(), &[Category::Bottom, Category::Dress]);
        assert_eq!(Category::Bottom.targets(), &[Category::Top, Category::Dress]);
        assert_eq!(Category::Dress.targets(), &[Category::Dress]);
    }

    #[test]
    fn test_season_overlap() {
        assert!(Season::Fall.overlaps(Season::Fall));
        assert!(Season::Fall.overlaps(Season::AllSeason));
        assert!(Season::AllSeason.overlaps(Season::Summer));
        assert!(!Season::Fall.overlaps(Season::Spring));
    }

    #[test]
    fn test_parse_round_trip_labels() {
        for season in Season::ALL {
            assert_eq!(season.as_str().parse::<Season>().unwrap(), *season);
        }
        assert_eq!("all-season".parse::<Season>().unwrap(), Season::AllSeason);
        assert_eq!("athletic".parse::<Occasion>().unwrap(), Occasion::Athletic);
    }

    #[test]
    fn test_parse_rejects_unknown_with_allowed_list() {
        let err = "hat".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Category must be one of: top, bottom, dress");

        let err = "Spring".parse::<Season>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Season must be one of: spring, summer, fall, winter, all-season"
        );
        assert_eq!(err.value, "Spring");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Season::AllSeason).unwrap();
        assert_eq!(json, "\"all-season\"");

        let occasion: Occasion = serde_json::from_str("\"business\"").unwrap();
        assert_eq!(occasion, Occasion::Business);
    }
}
