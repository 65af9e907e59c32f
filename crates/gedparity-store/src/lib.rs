//! gedparity-store
//!
//! Filesystem-backed storage for golden-reference GEDCOM snapshots. A store
//! is a directory tree of canonical documents addressed by relative slash
//! paths (`small/demo_min.ged`), plus an `index.json` manifest carrying a
//! sha256 digest and byte size per entry.
//!
//! The store never canonicalizes; callers write already-canonical text.
//! Reading tolerates undecodable bytes by dropping them (converter output
//! is not always clean UTF-8).

pub mod errors;
pub mod store;
pub mod text;

pub use crate::errors::{StoreError, StoreResult};
pub use crate::store::{SnapshotEntry, SnapshotIndex, SnapshotStore};
