use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use gedparity_bridge::config::CONVERTER_ROOT_ENV;
use gedparity_bridge::convert::{GED2GWB, GWB2GED};
use gedparity_bridge::Converter;
use gedparity_store::SnapshotStore;

use crate::cmd::EXIT_UNAVAILABLE;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

pub async fn run(store_root: &str) -> Result<ExitCode> {
    let converter = Converter::from_env();
    let mut checks = Vec::new();

    checks.push(Check {
        name: CONVERTER_ROOT_ENV.to_string(),
        ok: converter.config().is_some(),
        detail: "converter installation root (optional if binaries are on PATH)".to_string(),
    });

    for binary in [GWB2GED, GED2GWB] {
        let found = converter.locate(binary);
        checks.push(Check {
            name: binary.to_string(),
            ok: found.is_some(),
            detail: found
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "not found under root or PATH".to_string()),
        });
    }

    let store_ok = SnapshotStore::open(store_root).is_ok();
    checks.push(Check {
        name: "store".to_string(),
        ok: store_ok,
        detail: store_root.to_string(),
    });

    // The root env var is advisory; binaries and store are required.
    let ok = checks
        .iter()
        .all(|c| c.ok || c.name == CONVERTER_ROOT_ENV);
    output::print(&DoctorOut { ok, checks })?;

    if ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_UNAVAILABLE))
    }
}
