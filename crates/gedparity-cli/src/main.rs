use std::process::ExitCode;

use clap::Parser;

mod args;
mod cmd;
mod io;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = args::Cli::parse();
    output::init(cli.json);

    // Anything that escapes dispatch is a transport problem (unreadable
    // store, unwritable output), never a parity verdict: keep it on the
    // input-unavailable code, distinct from "documents differ".
    match cmd::dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::eprintln_line(&format!("error: {e:#}"));
            ExitCode::from(cmd::EXIT_UNAVAILABLE)
        }
    }
}
