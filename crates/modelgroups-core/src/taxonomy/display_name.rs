//! Human-readable model names.

use super::catalog::curated_display_name;

const SEPARATOR: char = '-';
const FALLBACK_NAME: &str = "Unknown";

/// Returns a friendly display name for a model id.
///
/// Known ids (either naming convention) use the curated table. Anything else
/// is formatted by splitting on `-` and capitalising each segment, so
/// `foo-bar-9` becomes `Foo Bar 9`. Never returns an empty string.
pub fn display_name(model_id: &str) -> String {
    if let Some(name) = curated_display_name(model_id) {
        return name.to_string();
    }

    let formatted = format_model_id(model_id);
    if formatted.trim().is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        formatted
    }
}

fn format_model_id(model_id: &str) -> String {
    model_id
        .split(SEPARATOR)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_names_for_both_conventions() {
        assert_eq!(display_name("gemini-3-flash"), "Gemini 3 Flash");
        assert_eq!(display_name("MODEL_PLACEHOLDER_M18"), "Gemini 3 Flash");
        assert_eq!(display_name("gpt-oss-120b-medium"), "GPT-OSS 120B (Medium)");
        assert_eq!(display_name("gemini-2.5-flash-lite"), "Gemini 2.5 Flash Lite");
    }

    #[test]
    fn test_unknown_id_is_formatted() {
        assert_eq!(display_name("unknown-model-x"), "Unknown Model X");
        assert_eq!(display_name("foo-bar-9"), "Foo Bar 9");
    }

    #[test]
    fn test_only_first_letter_changes() {
        assert_eq!(display_name("llama-3.1-70B"), "Llama 3.1 70B");
        assert_eq!(display_name("SOME_OTHER_ID"), "SOME_OTHER_ID");
    }

    #[test]
    fn test_blank_input_still_has_a_name() {
        assert_eq!(display_name(""), "Unknown");
        assert_eq!(display_name("--"), "Unknown");
    }
}
