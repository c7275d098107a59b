//! Group settings domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::taxonomy::{GroupDefinition, NamingConvention};

/// A group as shown in the settings surface during one editing session.
///
/// Only `name` is editable. `models` is the membership list of the active
/// naming convention and is used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSettings {
    pub id: String,
    pub name: String,
    pub models: Vec<String>,
}

impl GroupSettings {
    /// Creates a group with its default name from a taxonomy entry.
    pub fn from_definition(definition: &GroupDefinition, convention: NamingConvention) -> Self {
        Self {
            id: definition.id.to_string(),
            name: definition.default_name.to_string(),
            models: definition
                .members(convention)
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// The persisted shape of group settings.
///
/// `group_names` is the only user data. `group_mappings` is derived from
/// membership and kept for consumers that index by model id. `group_order`
/// is written explicitly so ordering never depends on map iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedGroupSettings {
    /// Model id → group id.
    #[serde(default)]
    pub group_mappings: BTreeMap<String, String>,
    /// Group id → user-chosen name.
    #[serde(default)]
    pub group_names: BTreeMap<String, String>,
    /// Group ids in display order.
    #[serde(default)]
    pub group_order: Vec<String>,
}

impl PersistedGroupSettings {
    /// Creates an empty record (no customizations).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored name for a group, ignoring empty entries.
    pub fn name_for(&self, group_id: &str) -> Option<&str> {
        self.group_names
            .get(group_id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::find_group;

    #[test]
    fn test_from_definition_selects_convention() {
        let def = find_group("g3_pro").unwrap();

        let desktop = GroupSettings::from_definition(def, NamingConvention::Desktop);
        assert_eq!(desktop.name, "G3-Pro");
        assert_eq!(desktop.models, vec!["gemini-3-pro-high", "gemini-3-pro-low"]);

        let plugin = GroupSettings::from_definition(def, NamingConvention::Plugin);
        assert_eq!(
            plugin.models,
            vec!["MODEL_PLACEHOLDER_M7", "MODEL_PLACEHOLDER_M8"]
        );
    }

    #[test]
    fn test_name_for_skips_empty() {
        let mut record = PersistedGroupSettings::new();
        record
            .group_names
            .insert("g3_flash".to_string(), "Fast Tier".to_string());
        record.group_names.insert("g3_pro".to_string(), String::new());

        assert_eq!(record.name_for("g3_flash"), Some("Fast Tier"));
        assert_eq!(record.name_for("g3_pro"), None);
        assert_eq!(record.name_for("g3_image"), None);
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let json = r#"{"groupNames":{"g3_flash":"Fast"},"groupOrder":["g3_flash"]}"#;
        let record: PersistedGroupSettings = serde_json::from_str(json).unwrap();
        assert_eq!(record.name_for("g3_flash"), Some("Fast"));
        assert!(record.group_mappings.is_empty());
        assert_eq!(record.group_order, vec!["g3_flash"]);
    }
}
