//! Taxonomy domain models.

use serde::{Deserialize, Serialize};

/// Identifier scheme used by a runtime surface.
///
/// The desktop app uses lowercase dashed ids (`gemini-3-flash`), the plugin
/// surface uses upper-case ids (`MODEL_PLACEHOLDER_M18`) for the same models.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamingConvention {
    /// Primary membership list.
    #[default]
    Desktop,
    /// Secondary membership list.
    Plugin,
}

/// A compiled-in group: stable id, default label and membership per convention.
///
/// `primary_members` and `secondary_members` name the same models and are
/// positionally aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDefinition {
    pub id: &'static str,
    pub default_name: &'static str,
    pub primary_members: &'static [&'static str],
    pub secondary_members: &'static [&'static str],
}

impl GroupDefinition {
    /// Returns the membership list for a naming convention.
    pub fn members(&self, convention: NamingConvention) -> &'static [&'static str] {
        match convention {
            NamingConvention::Desktop => self.primary_members,
            NamingConvention::Plugin => self.secondary_members,
        }
    }

    /// True if `model_id` is a member under either naming convention.
    pub fn contains(&self, model_id: &str) -> bool {
        self.primary_members.contains(&model_id) || self.secondary_members.contains(&model_id)
    }

    /// Iterates both membership lists, primary first.
    pub fn all_members(&self) -> impl Iterator<Item = &'static str> {
        self.primary_members
            .iter()
            .chain(self.secondary_members.iter())
            .copied()
    }
}

/// A group produced by `auto_group`: only the caller's ids that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelGroup {
    pub id: String,
    pub name: String,
    pub models: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: GroupDefinition = GroupDefinition {
        id: "sample",
        default_name: "Sample",
        primary_members: &["a-1", "b-2"],
        secondary_members: &["MODEL_A", "MODEL_B"],
    };

    #[test]
    fn test_members_by_convention() {
        assert_eq!(SAMPLE.members(NamingConvention::Desktop), &["a-1", "b-2"]);
        assert_eq!(
            SAMPLE.members(NamingConvention::Plugin),
            &["MODEL_A", "MODEL_B"]
        );
    }

    #[test]
    fn test_contains_either_convention() {
        assert!(SAMPLE.contains("a-1"));
        assert!(SAMPLE.contains("MODEL_B"));
        assert!(!SAMPLE.contains("model_b"));
        assert_eq!(SAMPLE.all_members().count(), 4);
    }

    #[test]
    fn test_convention_parse_and_display() {
        assert_eq!(
            "Plugin".parse::<NamingConvention>().unwrap(),
            NamingConvention::Plugin
        );
        assert_eq!(NamingConvention::Desktop.to_string(), "desktop");
        assert!("web".parse::<NamingConvention>().is_err());
    }
}
