//! gedparity-core
//!
//! Core primitives for gedparity:
//! - Canonicalization of GEDCOM-like documents into a deterministic normal form
//! - Structural line-by-line comparison with a sparse diff report
//! - Volatile-field redaction (export timestamps, output paths)
//! - Canonical sha256 digests (feature `sha256`)
//!
//! Everything here is pure and in-memory: no I/O, no environment access, no
//! shared state. Adapters (store, converter bridge, CLI, API) live in their
//! own crates.

pub mod canonical;
pub mod compare;
pub mod config;
pub mod errors;
pub mod line;
pub mod redact;

#[cfg(feature = "sha256")]
pub mod digest;

pub use crate::errors::{ParityError, ParityResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::canonical::{canonicalize, canonicalize_with_policy};
    pub use crate::compare::{compare, compare_with_policy, CompareReport, LineDiff};
    pub use crate::config::{validate_policy, HeaderPolicy};
    pub use crate::line::{classify, TaggedLine};
    pub use crate::redact::{default_rules, redact, RedactRule};
    pub use crate::{ParityError, ParityResult};

    #[cfg(feature = "sha256")]
    pub use crate::digest::canonical_digest_hex;
}
