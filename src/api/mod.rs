pub mod headers;
pub mod health;
pub mod outfits;
pub mod pinterest;
pub mod products;
pub mod rate_limit;

pub use health::{handle_api_index, handle_health, handle_not_found, HealthResponse};
pub use health::{__path_handle_api_index, __path_handle_health};
pub use outfits::{
    color_compatibility, suggest_outfit, ColorCompatibilityResponse, ProductColor,
    SelectedProduct, SuggestRequest, SuggestResponse, SuggestionEntry,
};
pub use outfits::{__path_color_compatibility, __path_suggest_outfit};
pub use pinterest::{board_pins, search_pins, BoardRequest, PinterestResponse, SearchRequest};
pub use pinterest::{__path_board_pins, __path_search_pins};
pub use products::{
    create_product, delete_product, get_product, list_products, update_product, DeleteResponse,
    ProductListResponse, ProductResponse,
};
pub use products::{
    __path_create_product, __path_delete_product, __path_get_product, __path_list_products,
    __path_update_product,
};
pub use rate_limit::enforce_rate_limit;
