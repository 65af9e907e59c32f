use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use walkdir::WalkDir;

use gedparity_bridge::{Converter, OutputTarget};
use gedparity_core::canonical::canonicalize;
use gedparity_core::compare::compare;
use gedparity_core::redact::{default_rules, redact};
use gedparity_store::text::decode_dropping_invalid;
use gedparity_store::{SnapshotStore, StoreError};

use crate::args::SnapshotCommand;
use crate::cmd::{EXIT_DIFFER, EXIT_UNAVAILABLE};
use crate::output;

#[derive(Debug, Serialize)]
pub struct GenerateOut {
    pub fixtures: usize,
    pub written: Vec<String>,
    pub indexed: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub snapshot: String,
    pub equal: bool,
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct CheckOut {
    pub ok: bool,
    pub results: Vec<CheckResult>,
}

#[derive(Debug, Serialize)]
pub struct ListOut {
    pub entries: Vec<gedparity_store::SnapshotEntry>,
}

pub async fn run(store_root: &str, command: SnapshotCommand) -> Result<ExitCode> {
    let store = match SnapshotStore::open(store_root) {
        Ok(store) => store,
        Err(e) => {
            output::eprintln_line(&format!("error: {e}"));
            return Ok(ExitCode::from(EXIT_UNAVAILABLE));
        }
    };

    match command {
        SnapshotCommand::Generate { fixtures } => generate(&store, &fixtures).await,
        SnapshotCommand::Check { fixtures } => check(&store, &fixtures).await,
        SnapshotCommand::List => list(&store),
    }
}

async fn generate(store: &SnapshotStore, fixtures_root: &Path) -> Result<ExitCode> {
    let fixtures = discover_fixtures(fixtures_root);
    if fixtures.is_empty() {
        output::eprintln_line(&format!(
            "error: no fixtures under {}",
            fixtures_root.display()
        ));
        return Ok(ExitCode::from(EXIT_UNAVAILABLE));
    }

    let converter = Converter::from_env();
    let pb = spinner();
    let mut written = Vec::new();

    for fixture in &fixtures {
        pb.set_message(format!("converting {}", fixture.name));
        let snapshot_name = format!("{}.ged", fixture.name);

        match export_canonical(&converter, fixture)? {
            Ok(canonical) => {
                store.write(&snapshot_name, &canonical)?;
                written.push(snapshot_name);
            }
            Err(code) => {
                pb.finish_and_clear();
                return Ok(code);
            }
        }
    }

    pb.set_message("writing index");
    let index = store.write_index()?;
    pb.finish_and_clear();

    output::print(&GenerateOut {
        fixtures: fixtures.len(),
        written,
        indexed: index.entries.len(),
    })?;
    Ok(ExitCode::SUCCESS)
}

async fn check(store: &SnapshotStore, fixtures_root: &Path) -> Result<ExitCode> {
    let fixtures = discover_fixtures(fixtures_root);
    if fixtures.is_empty() {
        output::eprintln_line(&format!(
            "error: no fixtures under {}",
            fixtures_root.display()
        ));
        return Ok(ExitCode::from(EXIT_UNAVAILABLE));
    }

    let converter = Converter::from_env();
    let rules = default_rules();
    let pb = spinner();
    let mut results = Vec::new();

    for fixture in &fixtures {
        pb.set_message(format!("checking {}", fixture.name));
        let snapshot_name = format!("{}.ged", fixture.name);

        let golden = match store.read(&snapshot_name) {
            Ok(text) => text,
            Err(e @ StoreError::NotFound(_)) => {
                pb.finish_and_clear();
                output::eprintln_line(&format!("error: {e}"));
                return Ok(ExitCode::from(EXIT_UNAVAILABLE));
            }
            Err(e) => return Err(e.into()),
        };

        let converted = match export_canonical(&converter, fixture)? {
            Ok(canonical) => canonical,
            Err(code) => {
                pb.finish_and_clear();
                return Ok(code);
            }
        };

        // Volatile fields differ between converter runs by design.
        let report = compare(&redact(&converted, &rules), &redact(&golden, &rules));
        results.push(CheckResult {
            snapshot: snapshot_name,
            equal: report.equal,
            report: report.render(),
        });
    }
    pb.finish_and_clear();

    let ok = results.iter().all(|r| r.equal);
    if output::is_json() {
        output::print(&CheckOut { ok, results })?;
    } else {
        for r in &results {
            let verdict = if r.equal { "ok" } else { "MISMATCH" };
            println!("{}: {verdict}", r.snapshot);
            if !r.equal {
                println!("{}", r.report);
            }
        }
    }

    if ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_DIFFER))
    }
}

fn list(store: &SnapshotStore) -> Result<ExitCode> {
    let entries = store.list()?;
    if output::is_json() {
        output::print(&ListOut { entries })?;
    } else {
        for e in &entries {
            println!("{}  {}  {}", e.digest, e.human_size(), e.name);
        }
    }
    Ok(ExitCode::SUCCESS)
}

struct Fixture {
    /// Relative slash path of the fixture directory.
    name: String,
    /// The `base` file inside it.
    base: PathBuf,
}

/// A fixture is any directory under the root containing a `base` file;
/// discovery order is made deterministic by sorting on name.
fn discover_fixtures(root: &Path) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for item in WalkDir::new(root).follow_links(false).into_iter().flatten() {
        if !item.file_type().is_dir() {
            continue;
        }
        let base = item.path().join("base");
        if !base.is_file() {
            continue;
        }
        let name = item
            .path()
            .strip_prefix(root)
            .unwrap_or(item.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if name.is_empty() {
            continue;
        }
        fixtures.push(Fixture { name, base });
    }
    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    fixtures
}

/// Convert one fixture and canonicalize the result.
///
/// Empty fixture bases produce empty snapshots without invoking the
/// converter. Converter failures surface on stderr with the
/// input-unavailable exit code (inner `Err`).
fn export_canonical(
    converter: &Converter,
    fixture: &Fixture,
) -> Result<std::result::Result<String, ExitCode>> {
    let metadata = std::fs::metadata(&fixture.base)?;
    if metadata.len() == 0 {
        return Ok(Ok(String::new()));
    }

    match converter.gwb2ged(&fixture.base, &OutputTarget::Stdout) {
        Ok(out) => Ok(Ok(canonicalize(&decode_dropping_invalid(&out.stdout)))),
        Err(e) => {
            output::eprintln_line(&format!("error: {}: {e}", fixture.name));
            Ok(Err(ExitCode::from(EXIT_UNAVAILABLE)))
        }
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
