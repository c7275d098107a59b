//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` in the config directory
//! (~/.config/modelgroups/config.toml) through `version_migrate::FileStorage`.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use modelgroups_core::config::RootConfig;
use modelgroups_core::error::{GroupSettingsError, Result};
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

use crate::dto::create_config_root_migrator;
use crate::paths::ModelGroupsPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    const ENTITY: &'static str = "config_root";

    /// Creates a service for the default `config.toml`.
    pub fn new() -> Result<Self> {
        let path = ModelGroupsPaths::config_file()
            .map_err(|e| GroupSettingsError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service for an explicit config file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// An unreadable or invalid file is reported as a warning, left untouched,
    /// and defaults are used.
    pub fn get_config(&self) -> RootConfig {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(config) = cached.as_ref() {
                return config.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                RootConfig::default()
            }
        };

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Loads the configuration from disk, bypassing the cache.
    ///
    /// A missing file is created with defaults. An existing file without a
    /// `config_root` entry yields defaults and is not rewritten.
    pub fn load_config(&self) -> Result<RootConfig> {
        let file_was_missing = !self.path.exists();
        let mut storage = self.open_storage()?;

        let configs: Vec<RootConfig> = storage.query(Self::ENTITY).map_err(|e| {
            GroupSettingsError::config(format!("Failed to query {}: {}", Self::ENTITY, e))
        })?;

        if let Some(config) = configs.into_iter().next() {
            return Ok(config);
        }

        let default_config = RootConfig::default();
        if file_was_missing {
            storage
                .update_and_save(Self::ENTITY, vec![default_config.clone()])
                .map_err(|e| {
                    GroupSettingsError::config(format!("Failed to save default config: {}", e))
                })?;
            tracing::debug!("Created default config at {}", self.path.display());
        }
        Ok(default_config)
    }

    /// Writes the configuration and refreshes the cache.
    pub fn save_config(&self, config: &RootConfig) -> Result<()> {
        let mut storage = self.open_storage()?;
        storage
            .update_and_save(Self::ENTITY, vec![config.clone()])
            .map_err(|e| GroupSettingsError::config(format!("Failed to save config: {}", e)))?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }

    fn open_storage(&self) -> Result<FileStorage> {
        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Toml)
            .with_load_behavior(LoadBehavior::CreateIfMissing);

        FileStorage::new(self.path.clone(), create_config_root_migrator(), strategy).map_err(|e| {
            GroupSettingsError::config(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgroups_core::taxonomy::NamingConvention;
    use tempfile::TempDir;

    const PLUGIN_CONFIG: &str = r#"
[[config_root]]
version = "1.0.0"

[config_root.groups]
surface = "plugin"
"#;

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());

        let config = service.get_config();

        assert_eq!(config, RootConfig::default());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[[config_root]]"));
        assert!(written.contains("1.0.0"));
        assert_eq!(service.load_config().unwrap(), RootConfig::default());
    }

    #[test]
    fn test_reads_existing_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, PLUGIN_CONFIG).unwrap();

        let config = ConfigService::with_path(path).get_config();

        assert_eq!(config.groups.surface, NamingConvention::Plugin);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let broken = PLUGIN_CONFIG.replace("plugin", "tablet");
        std::fs::write(&path, &broken).unwrap();
        let service = ConfigService::with_path(path.clone());

        assert!(service.load_config().unwrap_err().is_config());
        assert_eq!(service.get_config(), RootConfig::default());
        // The broken file is left for the user to fix
        assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_file_without_entry_is_not_rewritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "# hand-written notes\n").unwrap();
        let service = ConfigService::with_path(path.clone());

        assert_eq!(service.get_config(), RootConfig::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# hand-written notes\n"
        );
    }

    #[test]
    fn test_get_config_is_cached_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());

        assert_eq!(service.get_config().groups.surface, NamingConvention::Desktop);

        std::fs::write(&path, PLUGIN_CONFIG).unwrap();
        assert_eq!(service.get_config().groups.surface, NamingConvention::Desktop);

        service.invalidate_cache();
        assert_eq!(service.get_config().groups.surface, NamingConvention::Plugin);
    }

    #[test]
    fn test_save_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(path.clone());

        let mut config = RootConfig::default();
        config.groups.surface = NamingConvention::Plugin;
        config.groups.settings_file = Some("/tmp/groups.json".to_string());
        config.logging.to_file = true;
        service.save_config(&config).unwrap();

        assert_eq!(service.get_config(), config);
        assert_eq!(ConfigService::with_path(path).load_config().unwrap(), config);
    }
}
