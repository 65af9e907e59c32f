use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use gedparity_core::canonical::canonicalize;
use gedparity_core::digest::canonical_digest_hex;

use crate::cmd::input_unavailable;
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct CanonOut {
    pub input: String,
    pub bytes: usize,
    pub digest: String,
    pub wrote_to: Option<String>,
}

pub async fn run(input_arg: &str, out: Option<&Path>) -> Result<ExitCode> {
    let raw = match input::resolve_to_text(input_arg).await {
        Ok(text) => text,
        Err(e) => return Ok(input_unavailable(&e)),
    };

    let canonical = canonicalize(&raw);
    let digest = canonical_digest_hex(&raw);

    if let Some(path) = out {
        std::fs::write(path, canonical.as_bytes())?;
        output::print(&CanonOut {
            input: input_arg.to_string(),
            bytes: canonical.len(),
            digest,
            wrote_to: Some(path.display().to_string()),
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    if output::is_json() {
        output::print(&CanonOut {
            input: input_arg.to_string(),
            bytes: canonical.len(),
            digest,
            wrote_to: None,
        })?;
    } else {
        // Canonical text already ends with exactly one newline.
        print!("{canonical}");
    }
    Ok(ExitCode::SUCCESS)
}
