//! Shared server state.

use gedparity_bridge::{BridgeConfig, Converter};

/// State shared across request handlers.
///
/// `converter` is `None` when no GeneWeb installation is configured and no
/// binaries are wanted; export routes then answer 503.
#[derive(Debug, Default)]
pub struct AppState {
    pub converter: Option<Converter>,
}

impl AppState {
    /// Configure from `GENEWEB_OCAML_ROOT`; without it the converter is
    /// still usable if the binaries are on PATH.
    pub fn from_env() -> Self {
        Self {
            converter: Some(Converter::new(BridgeConfig::from_env())),
        }
    }

    /// State with no converter at all (pure canonicalize/compare service).
    pub fn without_converter() -> Self {
        Self { converter: None }
    }
}
