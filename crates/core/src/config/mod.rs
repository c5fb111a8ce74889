//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (GALLERY_*)
//! 2. TOML config file (if GALLERY_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (GALLERY_*)
/// 2. TOML config file (if GALLERY_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the SQLite document store.
    ///
    /// Set via GALLERY_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Lifetime of read-through cache entries, in seconds.
    ///
    /// Set via GALLERY_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Number of records sampled when resolving previous/next neighbours.
    ///
    /// Set via GALLERY_ADJACENCY_WINDOW environment variable.
    #[serde(default = "default_adjacency_window")]
    pub adjacency_window: usize,

    /// Optional JSON file of websites imported into the store at startup.
    ///
    /// Set via GALLERY_SEED_PATH environment variable.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./gallery.sqlite")
}

fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_adjacency_window() -> usize {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            cache_ttl_secs: default_cache_ttl_secs(),
            adjacency_window: default_adjacency_window(),
            seed_path: None,
        }
    }
}

impl AppConfig {
    /// Cache TTL as Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `GALLERY_`
    /// 2. TOML file from `GALLERY_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("GALLERY_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("GALLERY_")
                .ignore(&["config_file"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
