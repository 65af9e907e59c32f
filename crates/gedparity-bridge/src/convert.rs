//! Converter discovery and invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::BridgeConfig;
use crate::errors::{BridgeError, BridgeResult};

pub const GWB2GED: &str = "gwb2ged";
pub const GED2GWB: &str = "ged2gwb";

/// Where converter stdout should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to a file path (`-o <path>`).
    File(PathBuf),
    /// Stream to the converter's stdout (`-o -`).
    Stdout,
}

/// Captured output of a successful converter run.
///
/// `stdout` stays raw bytes: converter output is not always clean UTF-8,
/// and decoding policy belongs to the storage/CLI edge.
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    pub stdout: Vec<u8>,
    pub stderr: String,
}

/// Handle to the legacy converter binaries.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Option<BridgeConfig>,
}

impl Converter {
    pub fn new(config: Option<BridgeConfig>) -> Self {
        Self { config }
    }

    /// Converter configured from `GENEWEB_OCAML_ROOT`, falling back to PATH
    /// discovery when the variable is unset.
    pub fn from_env() -> Self {
        Self::new(BridgeConfig::from_env())
    }

    pub fn config(&self) -> Option<&BridgeConfig> {
        self.config.as_ref()
    }

    /// Locate a converter binary: configured root candidates first, then PATH.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        if let Some(cfg) = &self.config {
            for dir in cfg.candidate_dirs() {
                if let Some(found) = executable_in(&dir, name) {
                    return Some(found);
                }
            }
        }
        let paths = std::env::var_os("PATH")?;
        for dir in std::env::split_paths(&paths) {
            if let Some(found) = executable_in(&dir, name) {
                return Some(found);
            }
        }
        None
    }

    /// Export a GWB database to GEDCOM.
    ///
    /// `input_base` is the database base file; output goes to a file or to
    /// stdout per `output`.
    pub fn gwb2ged(&self, input_base: &Path, output: &OutputTarget) -> BridgeResult<ConvertOutput> {
        let mut args: Vec<std::ffi::OsString> = vec![input_base.into(), "-o".into()];
        match output {
            OutputTarget::File(path) => args.push(path.into()),
            OutputTarget::Stdout => args.push("-".into()),
        }
        self.run(GWB2GED, &args)
    }

    /// Import a GEDCOM file into a GWB database directory.
    pub fn ged2gwb(&self, input_file: &Path, output_dir: &Path) -> BridgeResult<ConvertOutput> {
        let args: Vec<std::ffi::OsString> =
            vec![input_file.into(), "-o".into(), output_dir.into()];
        self.run(GED2GWB, &args)
    }

    fn run(&self, name: &str, args: &[std::ffi::OsString]) -> BridgeResult<ConvertOutput> {
        let binary = self
            .locate(name)
            .ok_or_else(|| BridgeError::BinaryNotFound(name.to_string()))?;

        tracing::debug!(converter = name, binary = %binary.display(), ?args, "running converter");

        let out = Command::new(&binary).args(args).output()?;
        let stderr = String::from_utf8_lossy(&out.stderr).into_owned();

        if !out.status.success() {
            tracing::warn!(
                converter = name,
                code = ?out.status.code(),
                stderr = %stderr,
                "converter failed"
            );
            return Err(BridgeError::CommandFailed {
                code: out.status.code(),
                stderr,
            });
        }

        Ok(ConvertOutput {
            stdout: out.stdout,
            stderr,
        })
    }
}

fn executable_in(dir: &Path, name: &str) -> Option<PathBuf> {
    let full = dir.join(name);
    if full.is_file() {
        return Some(full);
    }
    #[cfg(windows)]
    {
        let full_exe = dir.join(format!("{name}.exe"));
        if full_exe.is_file() {
            return Some(full_exe);
        }
    }
    None
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn fake_converter(dir: &Path, name: &str, script: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn converter_at(root: &Path) -> Converter {
        Converter::new(Some(BridgeConfig::new(root)))
    }

    #[test]
    fn missing_binary_reported_by_name() {
        let dir = TempDir::new().unwrap();
        let conv = converter_at(dir.path());
        let err = conv
            .gwb2ged(Path::new("base"), &OutputTarget::Stdout)
            .unwrap_err();
        assert!(matches!(err, BridgeError::BinaryNotFound(n) if n == "gwb2ged"));
    }

    #[test]
    fn stdout_mode_captures_raw_bytes() {
        let dir = TempDir::new().unwrap();
        fake_converter(dir.path(), "gwb2ged", "printf '0 HEAD\\n0 TRLR\\n'");
        let conv = converter_at(dir.path());
        let out = conv
            .gwb2ged(Path::new("base"), &OutputTarget::Stdout)
            .unwrap();
        assert_eq!(out.stdout, b"0 HEAD\n0 TRLR\n");
    }

    #[test]
    fn nonzero_exit_carries_code_and_stderr() {
        let dir = TempDir::new().unwrap();
        fake_converter(dir.path(), "gwb2ged", "echo 'base not found' >&2; exit 3");
        let conv = converter_at(dir.path());
        let err = conv
            .gwb2ged(Path::new("base"), &OutputTarget::Stdout)
            .unwrap_err();
        match err {
            BridgeError::CommandFailed { code, stderr } => {
                assert_eq!(code, Some(3));
                assert!(stderr.contains("base not found"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn locate_prefers_root_candidates() {
        let dir = TempDir::new().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();
        fake_converter(&bin, "ged2gwb", "exit 0");
        let conv = converter_at(dir.path());
        assert_eq!(conv.locate("ged2gwb"), Some(bin.join("ged2gwb")));
    }

    #[test]
    fn ged2gwb_passes_output_dir() {
        let dir = TempDir::new().unwrap();
        fake_converter(dir.path(), "ged2gwb", "echo \"$@\"");
        let conv = converter_at(dir.path());
        let out = conv
            .ged2gwb(Path::new("in.ged"), Path::new("outdir"))
            .unwrap();
        let echoed = String::from_utf8(out.stdout).unwrap();
        assert!(echoed.contains("in.ged -o outdir"));
    }
}
