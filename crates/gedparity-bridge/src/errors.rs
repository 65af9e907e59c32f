//! Error types for converter invocation.

use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// Converter binary not found under the configured root or on PATH.
    #[error("converter binary not found: {0}")]
    BinaryNotFound(String),

    /// The process could not be spawned or its output not collected.
    #[error("failed to run converter: {0}")]
    Spawn(#[from] std::io::Error),

    /// The converter ran and exited nonzero (or was killed by a signal).
    #[error("converter exited with {}: {stderr}", code.map_or_else(|| "signal".to_string(), |c| format!("code {c}")))]
    CommandFailed {
        code: Option<i32>,
        stderr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_reports_code_and_stderr() {
        let e = BridgeError::CommandFailed {
            code: Some(2),
            stderr: "base not found".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("code 2"));
        assert!(msg.contains("base not found"));
    }

    #[test]
    fn signal_exit_has_no_code() {
        let e = BridgeError::CommandFailed {
            code: None,
            stderr: String::new(),
        };
        assert!(e.to_string().contains("signal"));
    }
}
