//! Group settings DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema with groupMappings, groupNames and groupOrder

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use modelgroups_core::group_settings::PersistedGroupSettings;

/// Group settings record DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct GroupSettingsV1_0_0 {
    /// Model id → group id
    #[serde(default)]
    pub group_mappings: BTreeMap<String, String>,
    /// Group id → display name
    #[serde(default)]
    pub group_names: BTreeMap<String, String>,
    /// Group ids in display order
    #[serde(default)]
    pub group_order: Vec<String>,
}

/// Convert GroupSettingsV1_0_0 DTO to domain model
impl IntoDomain<PersistedGroupSettings> for GroupSettingsV1_0_0 {
    fn into_domain(self) -> PersistedGroupSettings {
        PersistedGroupSettings {
            group_mappings: self.group_mappings,
            group_names: self.group_names,
            group_order: self.group_order,
        }
    }
}

/// Convert domain model to GroupSettingsV1_0_0 DTO (for version-migrate save support)
impl FromDomain<PersistedGroupSettings> for GroupSettingsV1_0_0 {
    fn from_domain(settings: PersistedGroupSettings) -> Self {
        GroupSettingsV1_0_0 {
            group_mappings: settings.group_mappings,
            group_names: settings.group_names,
            group_order: settings.group_order,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for PersistedGroupSettings entities.
pub fn create_group_settings_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();
    let path = version_migrate::Migrator::define("group_settings")
        .from::<GroupSettingsV1_0_0>()
        .into_with_save::<PersistedGroupSettings>();
    migrator
        .register(path)
        .expect("Failed to register group_settings migration path");
    migrator
}
