//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `cache_ttl_secs` is 0 or exceeds one hour
    /// - `adjacency_window` is 0 or exceeds 500
    /// - `db_path` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid { field: "cache_ttl_secs".into(), reason: "must be greater than 0".into() });
        }
        if self.cache_ttl_secs > 3600 {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_secs".into(),
                reason: "must not exceed 1 hour (3600s)".into(),
            });
        }

        if self.adjacency_window == 0 || self.adjacency_window > 500 {
            return Err(ConfigError::Invalid {
                field: "adjacency_window".into(),
                reason: "must be between 1 and 500".into(),
            });
        }

        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "db_path".into(), reason: "must not be empty".into() });
        }

        if let Some(seed) = &self.seed_path
            && !seed.exists()
        {
            tracing::warn!(seed_path = %seed.display(), "seed file does not exist; startup import will be skipped");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ttl_zero() {
        let config = AppConfig { cache_ttl_secs: 0, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "cache_ttl_secs"));
    }

    #[test]
    fn test_validate_ttl_exceeds_limit() {
        let config = AppConfig { cache_ttl_secs: 3601, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "cache_ttl_secs"));
    }

    #[test]
    fn test_validate_adjacency_window_bounds() {
        let config = AppConfig { adjacency_window: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "adjacency_window"));

        let config = AppConfig { adjacency_window: 501, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "adjacency_window"));
    }

    #[test]
    fn test_validate_empty_db_path() {
        let config = AppConfig { db_path: PathBuf::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "db_path"));
    }

    #[test]
    fn test_validate_edge_case_values() {
        let config = AppConfig { cache_ttl_secs: 1, adjacency_window: 1, ..Default::default() };
        assert!(config.validate().is_ok());

        let config = AppConfig { cache_ttl_secs: 3600, adjacency_window: 500, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_seed_is_not_fatal() {
        let config = AppConfig { seed_path: Some(PathBuf::from("/nonexistent/seed.json")), ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
