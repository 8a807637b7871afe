//! TypeScript declaration rendering.
//!
//! The output consists of up to three sections, always in this order and
//! separated by a blank line:
//! - `keys`: `TranslationKeys`, the union of every key
//! - `params`: `TranslationParamsMap`, the parameter shape per key
//! - `docs`: `TranslationDocs`, one documented signature per key
//!
//! Keys appear in the index's first-seen order in every section.

mod docs;
mod keys;
mod params;

use super::{
    error::{GenerateError, Result},
    index::TranslationIndex,
};
use crate::config::Config;

/// TypeScript type accepted for every interpolation parameter.
pub const PARAM_VALUE_TYPE: &str = "string | number | Date";

/// Options controlling which sections are emitted and how docs are ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub generate_keys: bool,
    pub generate_params: bool,
    pub generate_docs: bool,
    /// Languages listed first in documentation tables, highest priority first.
    pub preferred_lang_order: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            generate_keys: true,
            generate_params: true,
            generate_docs: true,
            preferred_lang_order: Vec::new(),
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            generate_keys: config.generate_keys,
            generate_params: config.generate_params,
            generate_docs: config.generate_docs,
            preferred_lang_order: config.preferred_lang_order.clone(),
        }
    }
}

/// Render the declaration file for `index`.
///
/// Fails with [`GenerateError::NoKeysFound`] when the index is empty. With
/// every section disabled the result is an empty string.
pub fn render(index: &TranslationIndex, options: &RenderOptions) -> Result<String> {
    if index.is_empty() {
        return Err(GenerateError::NoKeysFound);
    }

    let mut sections = Vec::with_capacity(3);
    if options.generate_keys {
        sections.push(keys::render_keys(index));
    }
    if options.generate_params {
        sections.push(params::render_params_map(index));
    }
    if options.generate_docs {
        sections.push(docs::render_docs(index, &options.preferred_lang_order));
    }

    Ok(sections.join("\n"))
}
