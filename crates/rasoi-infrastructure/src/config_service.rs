//! Configuration service implementation.
//!
//! Loads the client configuration from `~/.config/rasoi/config.toml`,
//! creating it with defaults on first use. The `RASOI_API_URL` environment
//! variable overrides the configured base URL.

use crate::paths::RasoiPaths;
use rasoi_core::Result;
use rasoi_core::config::ApiConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Environment variable that overrides the configured API origin.
pub const API_URL_ENV: &str = "RASOI_API_URL";

/// Loads and caches the client configuration.
///
/// The configuration is read lazily on first access and cached to avoid
/// repeated file I/O.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    config: Arc<RwLock<Option<ApiConfig>>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing file is created with defaults; an unreadable file falls
    /// back to defaults with a warning rather than failing the whole
    /// client.
    pub fn get_config(&self) -> ApiConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let mut loaded = Self::load_or_create().unwrap_or_else(|err| {
            warn!("failed to load config, using defaults: {}", err);
            ApiConfig::default()
        });

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                debug!("API base URL overridden from {}", API_URL_ENV);
                loaded.base_url = url;
            }
        }

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_or_create() -> Result<ApiConfig> {
        let path = Self::config_path()?;
        Self::load_or_create_at(&path)
    }

    fn load_or_create_at(path: &std::path::Path) -> Result<ApiConfig> {
        if !path.exists() {
            let default_config = ApiConfig::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            debug!(path = %path.display(), "created default config");
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn config_path() -> Result<PathBuf> {
        Ok(RasoiPaths::config_file()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasoi_core::config::DEFAULT_API_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_config_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = ConfigService::load_or_create_at(&path).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert!(path.exists());

        // A second load reads the file it just wrote
        let reloaded = ConfigService::load_or_create_at(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_reads_existing_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://menus.example.com\"\nhistory_limit = 5\n")
            .unwrap();

        let config = ConfigService::load_or_create_at(&path).unwrap();
        assert_eq!(config.base_url, "https://menus.example.com");
        assert_eq!(config.history_limit, 5);
    }
}
