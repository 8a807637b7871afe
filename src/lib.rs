//! locale-types - TypeScript declarations for JSON locale files
//!
//! Reads per-language JSON translation files, merges them into one key index
//! and generates a declaration file with:
//! - `TranslationKeys`: the union of every translation key
//! - `TranslationParamsMap`: the `{placeholder}` parameters each key requires
//! - `TranslationDocs`: per-key docs showing the text in every language
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (generate, watch, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery, merging and rendering pipeline

pub mod cli;
pub mod config;
pub mod core;
