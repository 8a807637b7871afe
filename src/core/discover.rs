use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use super::error::{GenerateError, Result};

/// A locale file and the language it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Language code (e.g., "en", "zh-CN").
    pub lang: String,
    pub path: PathBuf,
}

impl LocaleFile {
    pub fn new(lang: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            lang: lang.into(),
            path: path.into(),
        }
    }
}

/// Find every locale file below `input_dir`.
///
/// Two layouts are recognised and may be mixed:
/// - `<input_dir>/en.json`: the language is the file stem
/// - `<input_dir>/en/**/common.json`: the language is the top-level directory
///
/// Files whose path relative to `input_dir` matches one of `ignores` are
/// skipped. Entries are walked in file-name order, so the result (and the
/// merge order that follows from it) is stable across runs. Symbolic links
/// are followed and reported under the link's own path.
pub fn find_locale_files(
    input_dir: &Path,
    extension: &str,
    ignores: &[Pattern],
) -> Result<Vec<LocaleFile>> {
    if !input_dir.is_dir() {
        return Err(GenerateError::InvalidInputDir {
            path: input_dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| GenerateError::FileRead {
            path: e.path().unwrap_or(input_dir).to_path_buf(),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(input_dir) else {
            continue;
        };
        let Some(name) = relative.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(extension) {
            continue;
        }
        if ignores.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        if let Some(lang) = lang_for(relative, extension) {
            files.push(LocaleFile::new(lang, path));
        }
    }

    Ok(files)
}

/// Derive the language code from a path relative to the locale root.
fn lang_for(relative: &Path, extension: &str) -> Option<String> {
    let mut components = relative.components();
    let first = components.next()?.as_os_str().to_str()?;

    if components.next().is_some() {
        // en/common.json
        Some(first.to_string())
    } else {
        // en.json
        first
            .strip_suffix(extension)
            .filter(|stem| !stem.is_empty())
            .map(String::from)
    }
}
