//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Generate the declaration file once
//! - `watch`: Generate, then regenerate whenever a locale file changes
//! - `init`: Initialize the configuration file

use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by `generate` and `watch`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing the locale files (overrides config file)
    pub input_dir: Option<PathBuf>,

    /// Directory to write the declaration file into (overrides config file)
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Name of the generated file (overrides config file)
    #[arg(long)]
    pub output_file_name: Option<String>,

    /// Suffix of locale files, e.g. ".json" (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Do not emit the TranslationKeys union
    #[arg(long)]
    pub no_keys: bool,

    /// Do not emit the TranslationParamsMap type
    #[arg(long)]
    pub no_params: bool,

    /// Do not emit the TranslationDocs interface
    #[arg(long)]
    pub no_docs: bool,

    /// Language shown first in documentation tables
    /// Can be repeated or comma separated: --prefer en --prefer ru, --prefer en,ru
    #[arg(long = "prefer", value_name = "LANG", value_delimiter = ',')]
    pub prefer: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Turn the arguments into config overrides. Paths given on the command
    /// line are relative to `cwd`, not to the config file.
    pub fn overrides(&self, cwd: &Path) -> ConfigOverrides {
        let absolute = |path: &PathBuf| cwd.join(path).to_string_lossy().into_owned();
        ConfigOverrides {
            input_dir: self.input_dir.as_ref().map(absolute),
            output_path: self.output_path.as_ref().map(absolute),
            output_file_name: self.output_file_name.clone(),
            locale_files_extension: self.extension.clone(),
            no_keys: self.no_keys,
            no_params: self.no_params,
            no_docs: self.no_docs,
            preferred_lang_order: self.prefer.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit with status 1 when some keys lack a translation in some language
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct WatchCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Milliseconds to wait for more changes before regenerating
    #[arg(long, default_value_t = 200)]
    pub debounce_ms: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate TypeScript declarations from the locale files
    Generate(GenerateCommand),
    /// Generate, then regenerate whenever a locale file changes
    Watch(WatchCommand),
    /// Initialize a new translation-config.json configuration file
    Init,
}
