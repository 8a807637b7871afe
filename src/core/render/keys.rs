use super::super::index::TranslationIndex;

/// Render `TranslationKeys`, the union of all keys.
///
/// A single key is written inline; otherwise each key is its own `|` line.
pub(super) fn render_keys(index: &TranslationIndex) -> String {
    let keys: Vec<&str> = index.keys().collect();

    if let [only] = keys.as_slice() {
        return format!("export type TranslationKeys = {};\n", quote(only));
    }

    let alternatives = keys
        .iter()
        .map(|key| format!("  | {}", quote(key)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("export type TranslationKeys =\n{};\n", alternatives)
}

/// Quote a key as a TypeScript string literal.
pub(super) fn quote(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    out.push('"');
    for c in key.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
