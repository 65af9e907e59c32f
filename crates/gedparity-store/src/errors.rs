//! Error types for the snapshot store.
//!
//! `NotFound` is its own variant so callers can tell "no golden reference
//! yet" apart from I/O failures; a missing snapshot must never be reported
//! as a parity mismatch.

use std::path::PathBuf;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot name is absolute, escapes the store root, or is empty.
    #[error("invalid snapshot name: {0}")]
    InvalidName(String),

    /// No snapshot stored under this name.
    #[error("snapshot not found: {0}")]
    NotFound(String),

    #[error("store root unavailable: {}", .0.display())]
    RootUnavailable(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
