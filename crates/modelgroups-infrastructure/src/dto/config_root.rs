//! ConfigRoot DTOs and migrations
//!
//! `config.toml` holds a single `config_root` entity:
//!
//! ```toml
//! [[config_root]]
//! version = "1.0.0"
//!
//! [config_root.groups]
//! surface = "desktop"
//!
//! [config_root.logging]
//! level = "info"
//! to_file = false
//! ```
//!
//! ## Version History
//! - **1.0.0**: Initial schema with `groups` and `logging` sections

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use modelgroups_core::config::{GroupsConfig, LoggingConfig, RootConfig};

/// Root configuration DTO V1.0.0
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct ConfigRootV1_0_0 {
    #[serde(default)]
    pub groups: GroupsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl IntoDomain<RootConfig> for ConfigRootV1_0_0 {
    fn into_domain(self) -> RootConfig {
        RootConfig {
            groups: self.groups,
            logging: self.logging,
        }
    }
}

impl FromDomain<RootConfig> for ConfigRootV1_0_0 {
    fn from_domain(config: RootConfig) -> Self {
        ConfigRootV1_0_0 {
            groups: config.groups,
            logging: config.logging,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for the `config_root` entity.
pub fn create_config_root_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();
    let path = version_migrate::Migrator::define("config_root")
        .from::<ConfigRootV1_0_0>()
        .into_with_save::<RootConfig>();
    migrator
        .register(path)
        .expect("Failed to register config_root migration path");
    migrator
}
