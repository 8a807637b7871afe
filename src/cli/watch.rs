//! Watch mode: regenerate the declarations when locale files change.

use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver},
    time::Duration,
};

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};

use super::{exit_status::ExitStatus, report, run::Settings};
use crate::core::{self, pipeline::resolve_input_dir};

#[derive(Debug, Clone, Copy)]
pub struct WatchSettings {
    pub debounce_ms: u64,
    pub verbose: bool,
}

/// Generate once, then keep regenerating on every locale file change.
///
/// A failing regeneration is reported and watching continues. Only a failure
/// to set up the watcher ends the command.
pub fn watch(settings: Settings, options: WatchSettings) -> Result<ExitStatus> {
    let Settings { config, root } = settings;
    let input_dir = resolve_input_dir(&config, &root)?;
    let output_path = config.output_file(&root);

    let regenerate = || -> Result<()> {
        let generation = core::generate(&config, &root)?;
        report::print_generation(&generation, options.verbose);
        Ok(())
    };
    if let Err(err) = regenerate() {
        report::print_error(&err);
    }

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    watcher
        .watch(&input_dir, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", input_dir.display()))?;
    report::print_watching(&input_dir);

    Ok(watch_events(
        &rx,
        Duration::from_millis(options.debounce_ms),
        |event| is_relevant(event, &config.locale_files_extension, &output_path),
        regenerate,
    ))
}

/// Regenerate once per burst of relevant events until the channel closes.
///
/// Events arriving within `debounce` of each other are collapsed into one
/// regeneration. Errors from `regenerate` are printed and do not stop the loop.
fn watch_events<R, G>(
    rx: &Receiver<notify::Result<Event>>,
    debounce: Duration,
    should_regenerate: R,
    mut regenerate: G,
) -> ExitStatus
where
    R: Fn(&notify::Result<Event>) -> bool,
    G: FnMut() -> Result<()>,
{
    while let Ok(event) = rx.recv() {
        if !should_regenerate(&event) {
            continue;
        }

        // Editors often write a file in several steps.
        while rx.recv_timeout(debounce).is_ok() {}

        if let Err(err) = regenerate() {
            report::print_error(&err);
        }
    }

    ExitStatus::Success
}

/// Whether an event should trigger regeneration: a content change of a
/// locale file, never the generated output itself.
fn is_relevant(event: &notify::Result<Event>, extension: &str, output_path: &Path) -> bool {
    let Ok(event) = event else {
        return false;
    };
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| is_locale_path(path, extension) && !same_file(path, output_path))
}

fn is_locale_path(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

fn same_file(a: &Path, b: &Path) -> bool {
    let canonical = |p: &Path| p.canonicalize().unwrap_or_else(|_| PathBuf::from(p));
    a == b || canonical(a) == canonical(b)
}
