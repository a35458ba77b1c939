use crate::assets::AssetLoader;
use color_harmony::ScoringRules;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Outfit scoring rules
    #[serde(default)]
    pub outfit: ScoringRules,

    /// Pinterest proxy settings
    #[serde(default)]
    pub pinterest: PinterestConfig,
}

/// Pinterest search proxy configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PinterestConfig {
    /// API base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size when the client omits `limit`
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

fn default_base_url() -> String {
    "https://api.pinterest.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_limit() -> u32 {
    20
}

impl Default for PinterestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_limit: default_limit(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Fixed-window rate limit for the Pinterest routes
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

fn default_window_secs() -> u64 {
    900 // 15 minutes
}

fn default_max_requests() -> u32 {
    30
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_requests: default_max_requests(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::parse_or_default(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    fn parse_or_default(content: &str) -> Self {
        match serde_yaml::from_str::<Option<Self>>(content) {
            Ok(config) => {
                // An empty file parses as None
                let config = config.unwrap_or_default();
                tracing::info!(
                    threshold = config.outfit.threshold,
                    compatibility = ?config.outfit.compatibility,
                    min_score = config.outfit.min_score,
                    max_suggestions = config.outfit.max_suggestions,
                    pinterest_base_url = %config.pinterest.base_url,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
