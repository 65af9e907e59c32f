//! gedparity-bridge
//!
//! Invocation of the legacy GeneWeb converter binaries (`gwb2ged`,
//! `ged2gwb`) as opaque child processes. The bridge never parses converter
//! internals; it only hands back the text the converter emits, or a typed
//! failure carrying the exit code and captured stderr.
//!
//! Converter failures are transport errors, distinct from any parity
//! verdict; callers must never fold them into "documents differ".

pub mod config;
pub mod convert;
pub mod errors;

pub use crate::config::BridgeConfig;
pub use crate::convert::{ConvertOutput, Converter, OutputTarget};
pub use crate::errors::{BridgeError, BridgeResult};
