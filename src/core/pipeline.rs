use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;

use super::{
    coverage::{CoverageGap, find_coverage_gaps},
    discover::{LocaleFile, find_locale_files},
    error::{GenerateError, Result},
    index::TranslationIndex,
    reader::read_locale_files,
    render::{RenderOptions, render},
};
use crate::config::Config;

/// Summary of a successful generation run.
#[derive(Debug)]
pub struct Generation {
    pub output_path: PathBuf,
    pub locale_files: Vec<LocaleFile>,
    pub languages: Vec<String>,
    pub key_count: usize,
    pub coverage_gaps: Vec<CoverageGap>,
}

/// Build a [`TranslationIndex`] from the locale files, reading them in parallel.
pub fn build_index(files: &[LocaleFile]) -> Result<TranslationIndex> {
    let trees = read_locale_files(files)?;
    Ok(TranslationIndex::from_locales(
        trees.iter().map(|t| (t.lang.as_str(), &t.tree)),
    ))
}

/// Resolve the locale directory against `root`.
pub fn resolve_input_dir(config: &Config, root: &Path) -> Result<PathBuf> {
    let input_dir = config
        .input_dir
        .as_deref()
        .filter(|dir| !dir.trim().is_empty())
        .ok_or(GenerateError::MissingInputDir)?;

    let path = root.join(input_dir);
    if !path.is_dir() {
        return Err(GenerateError::InvalidInputDir { path });
    }
    Ok(path)
}

/// Run the whole pipeline: discover, read, merge, render and write.
///
/// Relative paths in `config` are resolved against `root`.
pub fn generate(config: &Config, root: &Path) -> Result<Generation> {
    let input_dir = resolve_input_dir(config, root)?;
    let ignores = config
        .ignores
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| GenerateError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let locale_files = find_locale_files(&input_dir, &config.locale_files_extension, &ignores)?;
    let index = build_index(&locale_files)?;
    let content = render(&index, &RenderOptions::from(config))?;

    let output_path = config.output_file(root);
    write_output(&output_path, &content)?;

    Ok(Generation {
        output_path,
        languages: index.languages().map(String::from).collect(),
        key_count: index.len(),
        coverage_gaps: find_coverage_gaps(&index),
        locale_files,
    })
}

/// Write the generated declarations, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
