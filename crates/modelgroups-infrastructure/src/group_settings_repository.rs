//! Group settings repository implementation.
//!
//! Stores the group settings record as a versioned JSON file. Uses
//! version-migrate for schema versioning and [`AtomicFile`] so a save replaces
//! mappings, names and order together.
//!
//! File location: `{config_dir}/group_settings.json`

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use version_migrate::Migrator;

use modelgroups_core::error::{GroupSettingsError, Result};
use modelgroups_core::group_settings::{GroupSettingsRepository, PersistedGroupSettings};

use crate::dto::create_group_settings_migrator;
use crate::paths::ModelGroupsPaths;
use crate::storage::{AtomicFile, AtomicFileError};

/// File-based group settings repository with version migration support.
pub struct FileGroupSettingsRepository {
    file: AtomicFile,
    migrator: Migrator,
}

impl FileGroupSettingsRepository {
    const ENTITY: &'static str = "group_settings";

    /// Creates a repository at the default location.
    pub fn new() -> Result<Self> {
        let path = ModelGroupsPaths::group_settings_file()
            .map_err(|e| GroupSettingsError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository backed by a custom file (config override, tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
            migrator: create_group_settings_migrator(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

fn join_error(e: tokio::task::JoinError) -> GroupSettingsError {
    GroupSettingsError::internal(format!("Failed to join task: {}", e))
}

fn read_error(e: AtomicFileError) -> GroupSettingsError {
    let message = format!("Failed to read group settings: {}", e);
    if e.is_invalid_data() {
        GroupSettingsError::corrupt("JSON", message)
    } else {
        GroupSettingsError::unavailable(message)
    }
}

fn write_error(e: AtomicFileError) -> GroupSettingsError {
    let message = format!("Failed to write group settings: {}", e);
    if e.is_permission_denied() {
        GroupSettingsError::write_rejected(message)
    } else {
        GroupSettingsError::unavailable(message)
    }
}

#[async_trait]
impl GroupSettingsRepository for FileGroupSettingsRepository {
    async fn read_settings(&self) -> Result<PersistedGroupSettings> {
        let file = self.file.clone();
        let content = tokio::task::spawn_blocking(move || file.read())
            .await
            .map_err(join_error)?
            .map_err(read_error)?;

        let Some(content) = content else {
            // No customizations yet
            tracing::debug!("No group settings at {}", self.path().display());
            return Ok(PersistedGroupSettings::default());
        };

        let json_value: serde_json::Value = serde_json::from_str(&content)?;

        let settings: PersistedGroupSettings = self
            .migrator
            .load_flat_from(Self::ENTITY, json_value)
            .map_err(|e| {
                GroupSettingsError::corrupt(
                    "JSON",
                    format!("Failed to migrate group settings: {}", e),
                )
            })?;

        Ok(settings)
    }

    async fn write_settings(&self, settings: &PersistedGroupSettings) -> Result<()> {
        // Serialize using migrator (includes version info)
        let serialized = self
            .migrator
            .save_domain_flat(Self::ENTITY, settings.clone())
            .map_err(|e| {
                GroupSettingsError::write_rejected(format!(
                    "Failed to serialize group settings: {}",
                    e
                ))
            })?;

        let file = self.file.clone();
        tokio::task::spawn_blocking(move || file.write(&serialized))
            .await
            .map_err(join_error)?
            .map_err(write_error)?;

        tracing::debug!("Wrote group settings to {}", self.path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_settings() -> PersistedGroupSettings {
        let mut settings = PersistedGroupSettings::new();
        settings
            .group_names
            .insert("g3_flash".to_string(), "Fast Tier".to_string());
        settings
            .group_names
            .insert("claude_45".to_string(), "Claude".to_string());
        settings
            .group_mappings
            .insert("gemini-3-flash".to_string(), "g3_flash".to_string());
        settings.group_order = vec!["claude_45".to_string(), "g3_flash".to_string()];
        settings
    }

    #[tokio::test]
    async fn test_read_default_when_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileGroupSettingsRepository::with_path(temp_dir.path().join("groups.json"));

        let settings = repo.read_settings().await.unwrap();
        assert_eq!(settings, PersistedGroupSettings::default());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileGroupSettingsRepository::with_path(temp_dir.path().join("groups.json"));

        repo.write_settings(&sample_settings()).await.unwrap();

        let loaded = repo.read_settings().await.unwrap();
        assert_eq!(loaded, sample_settings());
    }

    #[tokio::test]
    async fn test_file_uses_camel_case_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        let repo = FileGroupSettingsRepository::with_path(path.clone());

        repo.write_settings(&sample_settings()).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("groupMappings"));
        assert!(raw.contains("groupNames"));
        assert!(raw.contains("groupOrder"));
    }

    #[tokio::test]
    async fn test_read_garbage_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        std::fs::write(&path, "{ this is not json").unwrap();
        let repo = FileGroupSettingsRepository::with_path(path);

        let err = repo.read_settings().await.unwrap_err();
        assert!(err.is_corrupt(), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_read_non_utf8_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        std::fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();
        let repo = FileGroupSettingsRepository::with_path(path);

        let err = repo.read_settings().await.unwrap_err();
        assert!(err.is_corrupt(), "unexpected error: {}", err);
    }

    #[test]
    fn test_read_only_filesystem_is_write_rejected() {
        let err = write_error(AtomicFileError::from(std::io::Error::from(
            std::io::ErrorKind::ReadOnlyFilesystem,
        )));
        assert!(err.is_write_rejected(), "unexpected error: {}", err);

        let err = write_error(AtomicFileError::from(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        )));
        assert!(err.is_unavailable(), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_read_directory_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as a file
        let repo = FileGroupSettingsRepository::with_path(temp_dir.path().to_path_buf());

        let err = repo.read_settings().await.unwrap_err();
        assert!(err.is_unavailable(), "unexpected error: {}", err);
    }
}
