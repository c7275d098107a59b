//! Compiled-in group taxonomy and model display names.
//!
//! Everything here is process-wide immutable data. The lookup tables are built
//! once on first access and only exposed through read accessors.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::model::GroupDefinition;

/// The fixed group taxonomy, in display order.
pub static GROUPS: [GroupDefinition; 4] = [
    GroupDefinition {
        id: "claude_45",
        default_name: "Claude 4.5",
        primary_members: &[
            "claude-opus-4-5-thinking",
            "claude-sonnet-4-5",
            "claude-sonnet-4-5-thinking",
            "gpt-oss-120b-medium",
        ],
        secondary_members: &[
            "MODEL_PLACEHOLDER_M12",
            "MODEL_CLAUDE_4_5_SONNET",
            "MODEL_CLAUDE_4_5_SONNET_THINKING",
            "MODEL_OPENAI_GPT_OSS_120B_MEDIUM",
        ],
    },
    GroupDefinition {
        id: "g3_pro",
        default_name: "G3-Pro",
        primary_members: &["gemini-3-pro-high", "gemini-3-pro-low"],
        secondary_members: &["MODEL_PLACEHOLDER_M7", "MODEL_PLACEHOLDER_M8"],
    },
    GroupDefinition {
        id: "g3_flash",
        default_name: "G3-Flash",
        primary_members: &["gemini-3-flash"],
        secondary_members: &["MODEL_PLACEHOLDER_M18"],
    },
    GroupDefinition {
        id: "g3_image",
        default_name: "G3-Image",
        primary_members: &["gemini-3-pro-image"],
        secondary_members: &["MODEL_PLACEHOLDER_M9"],
    },
];

/// Model id → display name, for both naming conventions.
///
/// The Gemini 2.5 family has curated names but belongs to no group.
static DISPLAY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Desktop ids
        ("claude-opus-4-5-thinking", "Claude Opus 4.5 (Thinking)"),
        ("claude-sonnet-4-5", "Claude Sonnet 4.5"),
        ("claude-sonnet-4-5-thinking", "Claude Sonnet 4.5 (Thinking)"),
        ("gemini-3-flash", "Gemini 3 Flash"),
        ("gemini-3-pro-high", "Gemini 3 Pro (High)"),
        ("gemini-3-pro-low", "Gemini 3 Pro (Low)"),
        ("gemini-3-pro-image", "Gemini 3 Pro Image"),
        ("gpt-oss-120b-medium", "GPT-OSS 120B (Medium)"),
        ("gemini-2.5-flash", "Gemini 2.5 Flash"),
        ("gemini-2.5-flash-lite", "Gemini 2.5 Flash Lite"),
        ("gemini-2.5-flash-thinking", "Gemini 2.5 Flash (Thinking)"),
        ("gemini-2.5-pro", "Gemini 2.5 Pro"),
        // Plugin ids
        ("MODEL_PLACEHOLDER_M12", "Claude Opus 4.5 (Thinking)"),
        ("MODEL_CLAUDE_4_5_SONNET", "Claude Sonnet 4.5"),
        (
            "MODEL_CLAUDE_4_5_SONNET_THINKING",
            "Claude Sonnet 4.5 (Thinking)",
        ),
        ("MODEL_PLACEHOLDER_M18", "Gemini 3 Flash"),
        ("MODEL_PLACEHOLDER_M7", "Gemini 3 Pro (High)"),
        ("MODEL_PLACEHOLDER_M8", "Gemini 3 Pro (Low)"),
        ("MODEL_PLACEHOLDER_M9", "Gemini 3 Pro Image"),
        ("MODEL_OPENAI_GPT_OSS_120B_MEDIUM", "GPT-OSS 120B (Medium)"),
    ])
});

/// Union of every group's membership lists.
static RECOMMENDED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| GROUPS.iter().flat_map(|g| g.all_members()).collect());

/// Returns the fixed taxonomy in display order.
pub fn list_groups() -> &'static [GroupDefinition] {
    &GROUPS
}

/// Finds a group definition by id.
pub fn find_group(id: &str) -> Option<&'static GroupDefinition> {
    GROUPS.iter().find(|g| g.id == id)
}

pub(crate) fn curated_display_name(model_id: &str) -> Option<&'static str> {
    DISPLAY_NAMES.get(model_id).copied()
}

pub(crate) fn recommended_set() -> &'static HashSet<&'static str> {
    &RECOMMENDED
}
