use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Result};
use url::Url;

use gedparity_store::text::decode_dropping_invalid;

/// Resolve an input argument to document text.
///
/// Accepts `-` for stdin, an http(s) URL, or a local file path. Bytes are
/// decoded dropping invalid UTF-8 sequences, matching how snapshots are
/// read. Any failure here is an "input unavailable" condition, never a
/// parity verdict.
pub async fn resolve_to_text(input: &str) -> Result<String> {
    if input == "-" {
        return read_stdin();
    }
    if looks_like_url(input) {
        return fetch_url_text(input).await;
    }
    read_file_text(input)
}

pub fn read_file_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = std::fs::read(path.as_ref())
        .map_err(|e| anyhow!("cannot read {}: {e}", path.as_ref().display()))?;
    Ok(decode_dropping_invalid(&bytes))
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(decode_dropping_invalid(&bytes))
}

async fn fetch_url_text(url: &str) -> Result<String> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("http error: {status}"));
    }
    let bytes = resp.bytes().await?;
    Ok(decode_dropping_invalid(&bytes))
}

fn looks_like_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
