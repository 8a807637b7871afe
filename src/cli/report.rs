//! Report formatting and printing utilities.
//!
//! Separate from the core pipeline so it can be used as a library without
//! printing anything.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{CoverageGap, Generation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a generation run.
///
/// The summary goes to stdout, coverage warnings to stderr.
pub fn print_generation(generation: &Generation, verbose: bool) {
    print_generation_to(
        generation,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print the outcome of a generation run to custom writers.
pub fn print_generation_to<O: Write, E: Write>(
    generation: &Generation,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        print_locale_files(generation, out);
    }

    let files = generation.locale_files.len();
    let languages = generation.languages.len();
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} ({} {}, {} {} from {} locale {})",
            generation.output_path.display(),
            generation.key_count,
            plural(generation.key_count, "key", "keys"),
            languages,
            plural(languages, "language", "languages"),
            files,
            plural(files, "file", "files"),
        )
        .green()
    );

    print_coverage_gaps_to(&generation.coverage_gaps, verbose, err);
}

/// Print keys that are missing translations.
///
/// Verbose mode lists every key; otherwise a single hint line is printed.
pub fn print_coverage_gaps_to<W: Write>(gaps: &[CoverageGap], verbose: bool, writer: &mut W) {
    if gaps.is_empty() {
        return;
    }

    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} {} missing translations (use {} for details)",
            "warning:".bold().yellow(),
            gaps.len(),
            plural(gaps.len(), "key is", "keys are"),
            "-v".cyan()
        );
        return;
    }

    for gap in gaps {
        let _ = writeln!(
            writer,
            "{} \"{}\" has no translation in: {}",
            "warning:".bold().yellow(),
            gap.key,
            gap.missing_in.join(", ").cyan()
        );
    }
}

/// Print an error in the CLI's error format.
pub fn print_error(error: &anyhow::Error) {
    print_error_to(error, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(error: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {:#}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        error
    );
}

/// Announce that watch mode is waiting for changes.
pub fn print_watching(input_dir: &Path) {
    println!(
        "{} {}",
        "Watching".bold().cyan(),
        format!("{} for changes (Ctrl+C to stop)", input_dir.display()).dimmed()
    );
}

pub fn print_init(path: &Path) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", path.display()).green()
    );
}

fn print_locale_files<W: Write>(generation: &Generation, writer: &mut W) {
    let width = generation
        .locale_files
        .iter()
        .map(|f| f.lang.width())
        .max()
        .unwrap_or(0);

    for file in &generation.locale_files {
        let fill = " ".repeat(width - file.lang.width());
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            file.lang.cyan(),
            fill,
            file.path.display().to_string().dimmed()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
