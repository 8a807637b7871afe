//! Core generation pipeline.
//!
//! Locale files flow through four stages:
//!
//! 1. **Discover** (`discover`): find `(language, path)` pairs below the
//!    locale directory.
//! 2. **Read** (`reader`): parse every file in parallel into a JSON object.
//! 3. **Merge** (`index`): flatten each object into dotted keys (`flatten`),
//!    extract `{placeholder}` names (`params`) and fold everything into a
//!    [`TranslationIndex`].
//! 4. **Render** (`render`): turn the index into TypeScript declarations.
//!
//! `pipeline` wires the stages together and writes the result. Nothing in
//! this module prints; reporting belongs to the CLI.

pub mod coverage;
pub mod discover;
pub mod error;
pub mod flatten;
pub mod index;
pub mod params;
pub mod pipeline;
pub mod reader;
pub mod render;

pub use coverage::{CoverageGap, find_coverage_gaps};
pub use discover::{LocaleFile, find_locale_files};
pub use error::GenerateError;
pub use flatten::{FlatEntry, flatten_translations};
pub use index::{KeyDescriptor, TranslationIndex};
pub use params::extract_params;
pub use pipeline::{Generation, build_index, generate, write_output};
pub use reader::{LocaleTree, read_locale_file, read_locale_files};
pub use render::{RenderOptions, render};
