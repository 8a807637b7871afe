use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "translation-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub input_dir: Option<String>,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,
    #[serde(default = "default_locale_files_extension", alias = "jsonFileExtension")]
    pub locale_files_extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_true")]
    pub generate_keys: bool,
    #[serde(default = "default_true")]
    pub generate_params: bool,
    #[serde(default = "default_true")]
    pub generate_docs: bool,
    #[serde(default)]
    pub preferred_lang_order: Vec<String>,
    #[serde(default)]
    pub generate_on_change: bool,
}

fn default_output_path() -> String {
    "./".to_string()
}

fn default_output_file_name() -> String {
    "translations.d.ts".to_string()
}

fn default_locale_files_extension() -> String {
    ".json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: None,
            output_path: default_output_path(),
            output_file_name: default_output_file_name(),
            locale_files_extension: default_locale_files_extension(),
            ignores: Vec::new(),
            generate_keys: true,
            generate_params: true,
            generate_docs: true,
            preferred_lang_order: Vec::new(),
            generate_on_change: false,
        }
    }
}

/// Values given on the command line. `None` (or `false` for the switches)
/// leaves the config file's value untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_dir: Option<String>,
    pub output_path: Option<String>,
    pub output_file_name: Option<String>,
    pub locale_files_extension: Option<String>,
    pub no_keys: bool,
    pub no_params: bool,
    pub no_docs: bool,
    pub preferred_lang_order: Vec<String>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for empty file settings, invalid glob patterns in
    /// `ignores` or duplicated entries in `preferredLangOrder`.
    pub fn validate(&self) -> Result<()> {
        if self.output_file_name.trim().is_empty() {
            bail!("'outputFileName' must not be empty");
        }
        if self.locale_files_extension.is_empty() {
            bail!("'localeFilesExtension' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        let mut seen = HashSet::new();
        for lang in &self.preferred_lang_order {
            if !seen.insert(lang) {
                bail!("Duplicate language in 'preferredLangOrder': \"{}\"", lang);
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input_dir) = overrides.input_dir {
            self.input_dir = Some(input_dir);
        }
        if let Some(output_path) = overrides.output_path {
            self.output_path = output_path;
        }
        if let Some(output_file_name) = overrides.output_file_name {
            self.output_file_name = output_file_name;
        }
        if let Some(extension) = overrides.locale_files_extension {
            self.locale_files_extension = extension;
        }
        if overrides.no_keys {
            self.generate_keys = false;
        }
        if overrides.no_params {
            self.generate_params = false;
        }
        if overrides.no_docs {
            self.generate_docs = false;
        }
        if !overrides.preferred_lang_order.is_empty() {
            self.preferred_lang_order = overrides.preferred_lang_order;
        }
        self
    }

    /// Path of the generated file, relative to `root` unless absolute.
    pub fn output_file(&self, root: &Path) -> PathBuf {
        root.join(&self.output_path).join(&self.output_file_name)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
