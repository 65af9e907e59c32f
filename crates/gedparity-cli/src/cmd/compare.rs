use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

use gedparity_core::compare::{compare, CompareReport, LineDiff};
use gedparity_core::redact::{default_rules, redact};

use crate::cmd::{input_unavailable, EXIT_DIFFER};
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct CompareOut {
    pub left: String,
    pub right: String,
    pub equal: bool,
    pub report: String,
    pub diffs: Vec<LineDiff>,
}

pub async fn run(left_arg: &str, right_arg: &str, apply_redact: bool) -> Result<ExitCode> {
    let left = match input::resolve_to_text(left_arg).await {
        Ok(text) => text,
        Err(e) => return Ok(input_unavailable(&e)),
    };
    let right = match input::resolve_to_text(right_arg).await {
        Ok(text) => text,
        Err(e) => return Ok(input_unavailable(&e)),
    };

    let (left, right) = if apply_redact {
        let rules = default_rules();
        (redact(&left, &rules), redact(&right, &rules))
    } else {
        (left, right)
    };

    let report = compare(&left, &right);
    let equal = report.equal;

    if output::is_json() {
        output::print(&CompareOut {
            left: left_arg.to_string(),
            right: right_arg.to_string(),
            equal,
            report: report.render(),
            diffs: report.diffs,
        })?;
    } else {
        render_human(&report)?;
    }

    if equal {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_DIFFER))
    }
}

fn render_human(report: &CompareReport) -> Result<()> {
    let mut out = output::stdout();
    if report.equal {
        writeln!(out, "identical")?;
        return Ok(());
    }
    for diff in &report.diffs {
        writeln!(out, "Line {}:", diff.line)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(out, "  - {}", diff.left)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "  + {}", diff.right)?;
        out.reset()?;
    }
    Ok(())
}
