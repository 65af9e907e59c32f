use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use gedparity_bridge::{BridgeError, Converter, OutputTarget};

use crate::cmd::EXIT_UNAVAILABLE;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ConvertOut {
    pub converter: String,
    pub input: String,
    pub output: String,
    pub stderr: String,
}

pub async fn gwb2ged(input_dir: &Path, output_file: &Path) -> Result<ExitCode> {
    let converter = Converter::from_env();
    match converter.gwb2ged(input_dir, &OutputTarget::File(output_file.to_path_buf())) {
        Ok(out) => {
            report_success("gwb2ged", input_dir, output_file, &out.stderr)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

pub async fn ged2gwb(input_file: &Path, output_dir: &Path) -> Result<ExitCode> {
    let converter = Converter::from_env();
    match converter.ged2gwb(input_file, output_dir) {
        Ok(out) => {
            report_success("ged2gwb", input_file, output_dir, &out.stderr)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

fn report_success(name: &str, input: &Path, output: &Path, stderr: &str) -> Result<()> {
    if output::is_json() {
        output::print(&ConvertOut {
            converter: name.to_string(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            stderr: stderr.to_string(),
        })?;
    } else {
        println!("{name}: {} -> {}", input.display(), output.display());
        if !stderr.trim().is_empty() {
            output::eprintln_line(stderr.trim_end());
        }
    }
    Ok(())
}

/// Surface converter stderr and exit with the converter's own code when it
/// has one, the input-unavailable code otherwise.
fn report_failure(err: &BridgeError) -> ExitCode {
    match err {
        BridgeError::CommandFailed { code, stderr } => {
            output::eprintln_line(stderr.trim_end());
            let code = code
                .and_then(|c| u8::try_from(c).ok())
                .filter(|&c| c != 0)
                .unwrap_or(EXIT_UNAVAILABLE);
            ExitCode::from(code)
        }
        other => {
            output::eprintln_line(&format!("error: {other}"));
            ExitCode::from(EXIT_UNAVAILABLE)
        }
    }
}
