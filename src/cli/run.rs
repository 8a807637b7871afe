//! Command dispatch for the locale-types CLI.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command, CommonArgs, GenerateCommand},
    exit_status::ExitStatus,
    init::init,
    report,
    watch::{WatchSettings, watch},
};
use crate::{
    config::{Config, load_config},
    core,
};

/// Default debounce when watch mode is enabled through `generateOnChange`.
const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Effective configuration for one run.
pub struct Settings {
    pub config: Config,
    /// Directory that relative config paths are resolved against: the config
    /// file's directory, or the working directory without a config file.
    pub root: PathBuf,
}

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Watch(cmd)) => {
            let settings = load_settings(&cmd.common, &env::current_dir()?)?;
            watch(
                settings,
                WatchSettings {
                    debounce_ms: cmd.debounce_ms,
                    verbose: cmd.common.verbose,
                },
            )
        }
        Some(Command::Init) => init(&env::current_dir()?),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

/// How `generate` runs for a given configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerateMode {
    Once,
    /// `generateOnChange` is set: behave like `watch`.
    Watch,
}

fn generate_mode(config: &Config, strict: bool) -> Result<GenerateMode> {
    if !config.generate_on_change {
        return Ok(GenerateMode::Once);
    }
    if strict {
        bail!(
            "'--strict' cannot be combined with 'generateOnChange' (watch mode has no exit status)"
        );
    }
    Ok(GenerateMode::Watch)
}

fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let settings = load_settings(&cmd.common, &env::current_dir()?)?;

    if generate_mode(&settings.config, cmd.strict)? == GenerateMode::Watch {
        return watch(
            settings,
            WatchSettings {
                debounce_ms: DEFAULT_DEBOUNCE_MS,
                verbose,
            },
        );
    }

    let generation = core::generate(&settings.config, &settings.root)?;
    report::print_generation(&generation, verbose);

    if cmd.strict && !generation.coverage_gaps.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Load the config file (searching upward from `cwd`) and apply CLI overrides.
pub fn load_settings(common: &CommonArgs, cwd: &Path) -> Result<Settings> {
    let loaded = load_config(cwd)?;
    let root = loaded
        .source
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());

    let config = loaded.config.with_overrides(common.overrides(cwd));
    config.validate()?;

    Ok(Settings { config, root })
}
