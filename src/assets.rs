//! Asset loading with embedded fallbacks
//!
//! This module provides a unified interface for loading the two data files
//! the server needs (config.yaml and catalog.yaml) with the following
//! behavior:
//!
//! - If an env var is NOT set: use the embedded file only (no filesystem access)
//! - If an env var IS set and the file is missing: seed it with the embedded copy
//! - If an env var IS set and the file exists: use the file

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config and seed catalog
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.yaml"]
struct EmbeddedAssets;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Catalog,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::Config, AssetCategory::Catalog];

    /// Name of the embedded file
    pub fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Config => "config.yaml",
            AssetCategory::Catalog => "catalog.yaml",
        }
    }

    /// Environment variable that points at an external copy
    pub fn env_var(self) -> &'static str {
        match self {
            AssetCategory::Config => "CONFIG_FILE",
            AssetCategory::Catalog => "CATALOG_FILE",
        }
    }
}

/// Report of seeding operations
#[derive(Debug, Default)]
pub struct SeedReport {
    pub config_seeded: bool,
    pub catalog_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.config_seeded && !self.catalog_seeded
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External catalog file path (from CATALOG_FILE env var)
    catalog_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(config_file: Option<PathBuf>, catalog_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            catalog_file,
        }
    }

    /// Create a loader from CONFIG_FILE and CATALOG_FILE
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(AssetCategory::Config.env_var())
                .ok()
                .map(PathBuf::from),
            std::env::var(AssetCategory::Catalog.env_var())
                .ok()
                .map(PathBuf::from),
        )
    }

    /// Configured external path for a category, if any
    pub fn external_path(&self, category: AssetCategory) -> Option<&Path> {
        match category {
            AssetCategory::Config => self.config_file.as_deref(),
            AssetCategory::Catalog => self.catalog_file.as_deref(),
        }
    }

    /// Where a category is read from: the external path if it exists,
    /// otherwise "embedded".
    pub fn describe_source(&self, category: AssetCategory) -> String {
        match self.external_path(category) {
            Some(path) if path.exists() => path.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    /// Read an asset
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded copy.
    pub fn read(&self, category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = self.external_path(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        let name = category.file_name();
        EmbeddedAssets::get(name)
            .map(|f| {
                tracing::trace!(asset = name, "Loading asset from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Embedded {name} not found"))
            })
    }

    fn read_string(&self, category: AssetCategory) -> io::Result<String> {
        let bytes = self.read(category)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Config)
    }

    /// Read the seed catalog as a UTF-8 string
    pub fn read_catalog_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Catalog)
    }

    fn write_embedded(category: AssetCategory, path: &Path) -> io::Result<bool> {
        let Some(data) = EmbeddedAssets::get(category.file_name()) else {
            return Ok(false);
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &*data.data)?;
        Ok(true)
    }

    /// Seed missing external files with embedded copies
    ///
    /// Only operates on paths that were configured (env var was set).
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        for category in AssetCategory::ALL {
            let Some(path) = self.external_path(category) else {
                continue;
            };
            if path.exists() {
                continue;
            }
            if Self::write_embedded(category, path)? {
                tracing::info!(
                    path = %path.display(),
                    asset = category.file_name(),
                    "Seeded file with embedded default"
                );
                match category {
                    AssetCategory::Config => report.config_seeded = true,
                    AssetCategory::Catalog => report.catalog_seeded = true,
                }
            }
        }

        Ok(report)
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or `./<file name>` if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = self
                .external_path(category)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".").join(category.file_name()));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if Self::write_embedded(category, &path)? {
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        EmbeddedAssets::iter()
            .filter(|name| name.as_ref() == category.file_name())
            .map(|name| name.to_string())
            .collect()
    }
}
