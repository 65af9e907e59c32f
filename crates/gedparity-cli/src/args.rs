use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "gedparity", version, about = "GEDCOM canonicalization and parity CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Snapshot store root (default: .gedparity/snapshots)
    #[arg(long, global = true, default_value = ".gedparity/snapshots")]
    pub store_root: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Canonicalize a GEDCOM document (path, URL, or `-` for stdin).
    Canon {
        input: String,

        /// Write canonical text to this path instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Canonicalize two documents and report their structural diff.
    ///
    /// Exit codes: 0 equal, 1 documents differ, 2 input unavailable.
    Compare {
        left: String,
        right: String,

        /// Mask volatile fields (export time, output filename) first.
        #[arg(long)]
        redact: bool,
    },

    /// Export a GWB database to GEDCOM via the legacy converter.
    Gwb2ged {
        #[arg(long)]
        input_dir: PathBuf,
        #[arg(long)]
        output_file: PathBuf,
    },

    /// Import a GEDCOM file into a GWB database via the legacy converter.
    Ged2gwb {
        #[arg(long)]
        input_file: PathBuf,
        #[arg(long)]
        output_dir: PathBuf,
    },

    /// Manage golden-reference snapshots.
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommand,
    },

    /// Run environment checks.
    Doctor,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SnapshotCommand {
    /// Convert every fixture and write its canonical snapshot.
    Generate {
        /// Fixtures root: directories containing a `base` file.
        #[arg(long, default_value = "tests/fixtures/gwb")]
        fixtures: PathBuf,
    },

    /// Convert every fixture and compare against its stored snapshot.
    Check {
        #[arg(long, default_value = "tests/fixtures/gwb")]
        fixtures: PathBuf,
    },

    /// List stored snapshots.
    List,
}
