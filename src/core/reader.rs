use std::{fs, path::Path};

use rayon::prelude::*;
use serde_json::{Map, Value};

use super::{
    discover::LocaleFile,
    error::{GenerateError, Result},
};

/// The parsed content of one locale file.
#[derive(Debug, Clone)]
pub struct LocaleTree {
    pub lang: String,
    pub tree: Map<String, Value>,
}

/// Read and parse a locale file. The root value must be a JSON object.
pub fn read_locale_file(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| GenerateError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(GenerateError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Read all locale files in parallel.
///
/// Results keep the order of `files`, whatever order the reads finish in.
/// The first failure aborts the whole batch.
pub fn read_locale_files(files: &[LocaleFile]) -> Result<Vec<LocaleTree>> {
    files
        .par_iter()
        .map(|file| {
            read_locale_file(&file.path).map(|tree| LocaleTree {
                lang: file.lang.clone(),
                tree,
            })
        })
        .collect()
}
