use super::{
    super::index::{KeyDescriptor, TranslationIndex},
    PARAM_VALUE_TYPE,
    keys::quote,
};

/// Render `TranslationParamsMap`, mapping every key to its parameter shape.
pub(super) fn render_params_map(index: &TranslationIndex) -> String {
    let mut out = String::from("export type TranslationParamsMap = {\n");
    for (key, descriptor) in index.iter() {
        out.push_str(&format!("  {}: {};\n", quote(key), params_type(descriptor)));
    }
    out.push_str("};\n");
    out
}

/// The parameter shape of one key, `undefined` when it takes none.
pub(super) fn params_type(descriptor: &KeyDescriptor) -> String {
    params_object(descriptor).unwrap_or_else(|| "undefined".to_string())
}

/// `{ a: ...; b: ... }` for a key with parameters.
pub(super) fn params_object(descriptor: &KeyDescriptor) -> Option<String> {
    if descriptor.param_count() == 0 {
        return None;
    }
    let fields = descriptor
        .params()
        .map(|name| format!("{}: {}", property_name(name), PARAM_VALUE_TYPE))
        .collect::<Vec<_>>()
        .join("; ");
    Some(format!("{{ {} }}", fields))
}

/// Placeholder names are `[A-Za-z0-9_]+`. Identifiers and plain numbers are
/// valid property names as-is; anything starting with a digit otherwise
/// (e.g. `1st`) has to be quoted.
fn property_name(name: &str) -> String {
    let starts_with_digit = name.starts_with(|c: char| c.is_ascii_digit());
    let all_digits = name.chars().all(|c| c.is_ascii_digit());
    if starts_with_digit && !all_digits {
        quote(name)
    } else {
        name.to_string()
    }
}
