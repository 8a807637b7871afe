//! Interpolation placeholder extraction.

use std::sync::LazyLock;

use regex::Regex;

/// `{name}` where `name` is made of ASCII letters, digits and underscores.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// Extract the parameter names referenced by `{name}` placeholders.
///
/// Names come back in the order they appear in `text`. Repeated placeholders
/// are kept; deduplication happens when keys are merged across languages.
/// Doubled braces get no special treatment here, so `{{count}}` still
/// yields `count`.
pub fn extract_params(text: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
