//! Error types for gedparity-core.
//!
//! The core operations (canonicalize, compare, redact) are total and never
//! fail for any string input. Errors exist only for explicitly-checked
//! caller mistakes: invalid policy values, violated limits. Acquiring input
//! text (missing files, undecodable bytes) is the adapters' concern and is
//! reported through their own error types, never through these.

use thiserror::Error;

/// Result alias used across the core crate.
pub type ParityResult<T> = Result<T, ParityError>;

/// Core error type.
#[derive(Debug, Error)]
pub enum ParityError {
    /// A caller-supplied argument is invalid (bad policy, exceeded limit).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal invariant did not hold.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl ParityError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_detail() {
        let e = ParityError::invalid_argument("empty prefix");
        assert!(e.to_string().contains("empty prefix"));

        let e = ParityError::invariant("ordering broken");
        assert!(e.to_string().contains("ordering broken"));
    }
}
