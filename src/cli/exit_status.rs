use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Declarations generated (or nothing to do)
/// - `Failure` (1): Declarations generated, but `--strict` found untranslated keys
/// - `Error` (2): Generation failed (no keys, unreadable locale file, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but `--strict` found coverage gaps.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
