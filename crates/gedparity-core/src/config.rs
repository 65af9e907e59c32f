//! Canonicalization policy for gedparity-core.
//!
//! The header-field order applied by the canonicalizer is a fixed policy,
//! not user configuration: every deployment compares documents under the
//! same rules. It is still carried as an explicit value rather than a hidden
//! module constant so tests can exercise the reordering algorithm with a
//! custom list without touching the algorithm itself.
//!
//! The core crate does not read environment variables. All policy must be
//! provided explicitly by the caller (or taken from `HeaderPolicy::default`).

use crate::errors::{ParityError, ParityResult};

/// Literal line prefix that opens a header record.
pub const HEADER_START_PREFIX: &str = "0 HEAD";

/// Default preferred order for header fields.
///
/// Prefixes are matched literally against stripped header lines, in this
/// order. Fields matching no prefix keep their original relative order after
/// all matched fields. This list must remain stable: snapshots are written
/// in canonical form and re-canonicalized on every comparison.
pub const DEFAULT_PREFERRED_FIELDS: [&str; 10] = [
    "1 CHAR", "1 SOUR", "1 SUBM", "1 DEST", "1 DATE", "1 FILE", "1 GEDC", "1 LANG", "1 PLAC",
    "1 NOTE",
];

/// Header reordering policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPolicy {
    /// Preferred field prefixes, in priority order.
    pub preferred: Vec<String>,
}

impl Default for HeaderPolicy {
    fn default() -> Self {
        Self {
            preferred: DEFAULT_PREFERRED_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl HeaderPolicy {
    /// Build a policy from explicit prefixes (mostly for tests).
    pub fn with_preferred<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            preferred: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Validate a header policy.
///
/// An empty prefix would match every field and a duplicate prefix would make
/// the second occurrence dead; both indicate caller error.
pub fn validate_policy(policy: &HeaderPolicy) -> ParityResult<()> {
    for (i, prefix) in policy.preferred.iter().enumerate() {
        if prefix.is_empty() {
            return Err(ParityError::invalid_argument(format!(
                "header policy prefix {i} is empty"
            )));
        }
        if policy.preferred[..i].contains(prefix) {
            return Err(ParityError::invalid_argument(format!(
                "duplicate header policy prefix: {prefix}"
            )));
        }
    }
    Ok(())
}
