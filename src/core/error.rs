use std::path::PathBuf;

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

/// Errors that abort a generation run.
///
/// Every variant is fatal: the pipeline never skips a broken locale file or
/// emits a partial output.
#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("No translation keys found in the locale files")]
    NoKeysFound,

    #[error("Specify the locale directory as an argument or set 'inputDir' in the config file")]
    MissingInputDir,

    #[error("Locale directory '{}' does not exist or is not a directory", path.display())]
    InvalidInputDir { path: PathBuf },

    #[error("Invalid glob pattern in 'ignores': \"{pattern}\"")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read locale file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse locale file {}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Root of locale file must be an object: {}", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// True for the failures that originate from reading a single locale file.
    pub fn is_file_read_failure(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::InvalidJson { .. } | Self::NotAnObject { .. }
        )
    }
}
