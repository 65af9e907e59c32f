use std::process::ExitCode;

use anyhow::Result;

use crate::args::{Cli, Command};
use crate::output;

mod canon;
mod compare;
mod convert;
mod doctor;
mod snapshot;

/// Exit code for "documents differ" (distinct from input errors).
pub const EXIT_DIFFER: u8 = 1;
/// Exit code for "input unavailable" (missing file, bad URL, converter
/// missing). Never conflated with a parity verdict.
pub const EXIT_UNAVAILABLE: u8 = 2;

pub async fn dispatch(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Canon { input, out } => canon::run(&input, out.as_deref()).await,
        Command::Compare {
            left,
            right,
            redact,
        } => compare::run(&left, &right, redact).await,
        Command::Gwb2ged {
            input_dir,
            output_file,
        } => convert::gwb2ged(&input_dir, &output_file).await,
        Command::Ged2gwb {
            input_file,
            output_dir,
        } => convert::ged2gwb(&input_file, &output_dir).await,
        Command::Snapshot { command } => snapshot::run(&cli.store_root, command).await,
        Command::Doctor => doctor::run(&cli.store_root).await,
    }
}

/// Report an input-unavailable condition and produce its exit code.
pub fn input_unavailable(err: &anyhow::Error) -> ExitCode {
    output::eprintln_line(&format!("error: {err}"));
    ExitCode::from(EXIT_UNAVAILABLE)
}
