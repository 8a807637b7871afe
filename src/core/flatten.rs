use serde_json::{Map, Value};

/// A string leaf of a locale tree, addressed by its dotted key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    /// Dotted path to the leaf (e.g., "products.cart.items").
    pub key: String,
    /// The raw translation text.
    pub text: String,
}

impl FlatEntry {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Flatten a nested locale object into dotted keys.
///
/// Only string leaves produce entries. Numbers, booleans, nulls and arrays are
/// dropped together with anything nested inside them. Entries follow the
/// object's own key order, depth-first.
pub fn flatten_translations(tree: &Map<String, Value>, prefix: Option<&str>) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    flatten_into(tree, prefix.unwrap_or_default(), &mut entries);
    entries
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, entries: &mut Vec<FlatEntry>) {
    for (key, value) in map {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::String(text) => entries.push(FlatEntry::new(full_key, text.as_str())),
            Value::Object(nested) => flatten_into(nested, &full_key, entries),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => {}
        }
    }
}
