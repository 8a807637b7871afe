use anyhow::Result;

mod args;
mod exit_status;
mod init;
pub mod report;
mod run;
mod watch;

pub use args::{Arguments, Command, CommonArgs, GenerateCommand, WatchCommand};
pub use exit_status::ExitStatus;
pub use run::{Settings, load_settings};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
