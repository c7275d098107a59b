//! Path management for modelgroups configuration files.
//!
//! Paths are resolved via AppPaths from the version-migrate crate, so they
//! follow the platform conventions (XDG on Linux, Application Support on
//! macOS, AppData on Windows).

use std::path::PathBuf;
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path layout for modelgroups.
///
/// ```text
/// ~/.config/modelgroups/
/// ├── config.toml              # Application configuration
/// ├── group_settings.json      # Persisted group names, mappings and order
/// └── logs/                    # Application logs
///     └── modelgroups.log.YYYY-MM-DD
/// ```
pub struct ModelGroupsPaths;

impl ModelGroupsPaths {
    const APP_NAME: &'static str = "modelgroups";

    fn app_paths() -> AppPaths {
        AppPaths::new(Self::APP_NAME)
    }

    /// Returns the configuration directory (e.g., `~/.config/modelgroups/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        Self::app_paths()
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted group settings record.
    pub fn group_settings_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("group_settings.json"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = ModelGroupsPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("modelgroups"));
    }

    #[test]
    fn test_files_live_under_config_dir() {
        let config_dir = ModelGroupsPaths::config_dir().unwrap();

        let config_file = ModelGroupsPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(&config_dir));

        let settings_file = ModelGroupsPaths::group_settings_file().unwrap();
        assert!(settings_file.ends_with("group_settings.json"));
        assert!(settings_file.starts_with(&config_dir));

        let logs_dir = ModelGroupsPaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(&config_dir));
    }
}
