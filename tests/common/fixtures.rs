//! Test fixtures and constants.

use serde_json::{json, Value};

/// Ids of products in the embedded seed catalog
pub mod products {
    /// Classic White Button-Up Shirt, #FFFFFF top, all-season business
    pub const WHITE_SHIRT: &str = "65a1f0c2e4b0a1b2c3d4e501";

    /// Navy Blue Blazer, #000080 top, fall formal
    pub const NAVY_BLAZER: &str = "65a1f0c2e4b0a1b2c3d4e502";

    /// Casual Gray T-Shirt, #808080 top, all-season casual
    pub const GRAY_TEE: &str = "65a1f0c2e4b0a1b2c3d4e503";

    /// Coral Pink Blouse, #FF7F50 top, spring casual
    pub const CORAL_BLOUSE: &str = "65a1f0c2e4b0a1b2c3d4e504";

    /// Black Slim Fit Trousers, #000000 bottom, all-season formal
    pub const BLACK_TROUSERS: &str = "65a1f0c2e4b0a1b2c3d4e506";

    /// Light Blue Denim Jeans, #ADD8E6 bottom, all-season casual
    pub const LIGHT_JEANS: &str = "65a1f0c2e4b0a1b2c3d4e507";

    /// Beige Chino Pants, #F5F5DC bottom, spring business
    pub const BEIGE_CHINOS: &str = "65a1f0c2e4b0a1b2c3d4e508";

    /// Little Black Dress, #000000 dress, all-season party
    pub const BLACK_DRESS: &str = "65a1f0c2e4b0a1b2c3d4e50b";

    /// Red Cocktail Dress, #DC143C dress, winter party
    pub const RED_DRESS: &str = "65a1f0c2e4b0a1b2c3d4e50f";

    /// Well-formed id that is not in the catalog
    pub const MISSING: &str = "000000000000000000000000";
}

/// Number of products in the embedded seed catalog
pub const SEED_COUNT: usize = 15;
pub const SEED_TOPS: usize = 5;
pub const SEED_BOTTOMS: usize = 5;
pub const SEED_DRESSES: usize = 5;

/// Valid create-product body
pub fn product_body(name: &str, color: &str, category: &str, season: &str, occasion: &str) -> Value {
    json!({
        "name": name,
        "price": 39.5,
        "color": color,
        "category": category,
        "material": "Cotton",
        "season": season,
        "occasion": occasion,
        "image_url": "https://images.example.com/item.jpg",
    })
}
