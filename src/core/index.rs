//! Merging of per-language locale trees into one key index.
//!
//! Every locale file is flattened into dotted keys, and each key accumulates:
//! - the union of the parameter names found in any language (first-seen
//!   order, no duplicates)
//! - the raw text per language code
//!
//! Keys and languages keep the order in which they were first seen, so the
//! index is fully determined by the order of the locale files fed into it.

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use super::{flatten::flatten_translations, params::extract_params};

/// Merged data for a single translation key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDescriptor {
    params: IndexSet<String>,
    texts: IndexMap<String, String>,
}

impl KeyDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameter names in first-seen order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(String::as_str)
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Language code to raw text, in the order languages were merged.
    pub fn texts(&self) -> &IndexMap<String, String> {
        &self.texts
    }

    pub fn text(&self, lang: &str) -> Option<&str> {
        self.texts.get(lang).map(String::as_str)
    }

    pub fn has_translations(&self) -> bool {
        !self.texts.is_empty()
    }

    /// Add parameter names, skipping those already known.
    pub fn add_params<I, S>(&mut self, params: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for param in params {
            self.params.insert(param.into());
        }
    }

    /// Set the text for a language. A repeated language overwrites the
    /// previous text but keeps its original position.
    pub fn set_text(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(lang.into(), text.into());
    }

    /// Fold another descriptor for the same key into this one.
    pub fn absorb(&mut self, other: KeyDescriptor) {
        self.params.extend(other.params);
        for (lang, text) in other.texts {
            self.texts.insert(lang, text);
        }
    }
}

/// All translation keys discovered across the locale files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationIndex {
    entries: IndexMap<String, KeyDescriptor>,
    languages: IndexSet<String>,
}

impl TranslationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(language, tree)` pairs, merged in the given order.
    pub fn from_locales<'a, I>(locales: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Map<String, Value>)>,
    {
        let mut index = Self::new();
        for (lang, tree) in locales {
            index.add_locale(lang, tree);
        }
        index
    }

    /// Merge one locale tree into the index.
    pub fn add_locale(&mut self, lang: &str, tree: &Map<String, Value>) {
        self.languages.insert(lang.to_string());
        for entry in flatten_translations(tree, None) {
            let params = extract_params(&entry.text);
            let descriptor = self.entry(entry.key);
            descriptor.add_params(params);
            descriptor.set_text(lang, entry.text);
        }
    }

    /// Register a key without any translation.
    ///
    /// The key is rendered with a "no discovered translations" notice.
    pub fn insert_key(&mut self, key: impl Into<String>) -> &mut KeyDescriptor {
        self.entry(key.into())
    }

    /// Fold another index into this one. Keys and languages new to `self`
    /// are appended after the existing ones.
    pub fn merge(&mut self, other: TranslationIndex) {
        self.languages.extend(other.languages);
        for (key, descriptor) in other.entries {
            self.entry(key).absorb(descriptor);
        }
    }

    fn entry(&mut self, key: String) -> &mut KeyDescriptor {
        self.entries.entry(key).or_default()
    }

    pub fn get(&self, key: &str) -> Option<&KeyDescriptor> {
        self.entries.get(key)
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyDescriptor)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d))
    }

    /// Every language merged so far, in first-seen order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
