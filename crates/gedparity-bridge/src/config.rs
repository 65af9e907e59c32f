//! Bridge configuration.

use std::path::PathBuf;

/// Environment variable naming the converter installation root.
///
/// This is the contract variable used by the existing GeneWeb tooling; only
/// adapters read it, never library code on its own.
pub const CONVERTER_ROOT_ENV: &str = "GENEWEB_OCAML_ROOT";

/// Converter installation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub root: PathBuf,
}

impl BridgeConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read the root from `GENEWEB_OCAML_ROOT`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(CONVERTER_ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map(|v| Self { root: v.into() })
    }

    /// Subdirectories of the root searched for converter binaries, in order.
    ///
    /// Source builds put binaries at the root or `bin/`; release bundles
    /// under `distribution/gw/`.
    pub fn candidate_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.root.clone(),
            self.root.join("bin"),
            self.root.join("distribution").join("gw"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_dirs_in_search_order() {
        let cfg = BridgeConfig::new("/opt/geneweb");
        let dirs = cfg.candidate_dirs();
        assert_eq!(dirs[0], PathBuf::from("/opt/geneweb"));
        assert_eq!(dirs[1], PathBuf::from("/opt/geneweb/bin"));
        assert_eq!(dirs[2], PathBuf::from("/opt/geneweb/distribution/gw"));
    }
}
