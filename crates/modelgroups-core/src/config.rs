//! Application configuration model (`config.toml`).

use serde::{Deserialize, Serialize};
use version_migrate::DeriveQueryable as Queryable;

use crate::taxonomy::NamingConvention;

/// Root of `config.toml`.
///
/// Stored as the single `config_root` entity of a versioned TOML file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Queryable)]
#[queryable(entity = "config_root")]
pub struct RootConfig {
    #[serde(default)]
    pub groups: GroupsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupsConfig {
    /// Which membership list the settings surface shows.
    #[serde(default)]
    pub surface: NamingConvention,
    /// Overrides the location of `group_settings.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Also write daily log files under the config directory.
    #[serde(default)]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: false,
        }
    }
}
