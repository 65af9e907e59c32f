//! Structural comparison of GEDCOM-like documents.
//!
//! Comparison always canonicalizes both inputs first (canonicalization is
//! idempotent, so pre-canonicalized input is safe), then walks the two line
//! sequences in lock-step. The report lists only the differing positions,
//! never a full dump.
//!
//! Obtaining the texts (missing file, undecodable bytes) is the caller's
//! concern and must surface through the caller's own error types, never as a
//! "documents differ" verdict.

use itertools::{EitherOrBoth, Itertools};

use crate::canonical::canonicalize_with_policy;
use crate::config::HeaderPolicy;

/// Sentinel reported when one side has no line at a position.
pub const MISSING_SENTINEL: &str = "<MISSING>";

/// One differing position between two canonical documents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineDiff {
    /// 1-based line index in the canonical documents.
    pub line: usize,
    /// Left-side value, or [`MISSING_SENTINEL`].
    pub left: String,
    /// Right-side value, or [`MISSING_SENTINEL`].
    pub right: String,
}

/// Outcome of a structural comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareReport {
    /// True when the canonical forms are byte-identical.
    pub equal: bool,
    /// Differing positions, in document order. Empty when `equal`.
    pub diffs: Vec<LineDiff>,
}

impl CompareReport {
    /// Render the human-readable report text.
    ///
    /// `"identical"` for equal documents; otherwise one `Line N:` entry per
    /// differing position with the left value marked `-` and the right `+`.
    pub fn render(&self) -> String {
        if self.equal {
            return "identical".to_string();
        }
        self.diffs
            .iter()
            .map(|d| format!("Line {}: - {} / + {}", d.line, d.left, d.right))
            .join("\n")
    }
}

/// Compare two documents under the default header policy.
pub fn compare(a: &str, b: &str) -> CompareReport {
    compare_with_policy(a, b, &HeaderPolicy::default())
}

/// Compare two documents under an explicit header policy.
pub fn compare_with_policy(a: &str, b: &str, policy: &HeaderPolicy) -> CompareReport {
    let ca = canonicalize_with_policy(a, policy);
    let cb = canonicalize_with_policy(b, policy);

    if ca == cb {
        return CompareReport {
            equal: true,
            diffs: Vec::new(),
        };
    }

    let diffs = ca
        .lines()
        .zip_longest(cb.lines())
        .enumerate()
        .filter_map(|(i, pair)| {
            let (left, right) = match pair {
                EitherOrBoth::Both(l, r) => {
                    if l == r {
                        return None;
                    }
                    (l, r)
                }
                EitherOrBoth::Left(l) => (l, MISSING_SENTINEL),
                EitherOrBoth::Right(r) => (MISSING_SENTINEL, r),
            };
            Some(LineDiff {
                line: i + 1,
                left: left.to_string(),
                right: right.to_string(),
            })
        })
        .collect();

    CompareReport {
        equal: false,
        diffs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_after_canonicalization() {
        let a = "0 HEAD\n1 SOUR GeneWeb\n1 CHAR UTF-8   \n\n1 NOTE hello\n0 TRLR\n";
        let b = "0 HEAD\n1 CHAR UTF-8\n1 SOUR GeneWeb\n1 NOTE hello\n0 TRLR\n";
        let rep = compare(a, b);
        assert!(rep.equal);
        assert!(rep.diffs.is_empty());
        assert_eq!(rep.render(), "identical");
    }

    #[test]
    fn compare_with_self_is_identical() {
        let a = "0 HEAD\n1 CHAR UTF-8\n1 SOUR GeneWeb\n1 NOTE hello\n0 TRLR\n";
        let rep = compare(a, a);
        assert!(rep.equal);
        assert_eq!(rep.render(), "identical");
    }

    #[test]
    fn report_is_sparse_and_one_based() {
        let rep = compare("0 HEAD\n1 SOUR A\n", "0 HEAD\n1 SOUR B\n");
        assert!(!rep.equal);
        assert_eq!(rep.diffs.len(), 1);
        assert_eq!(rep.diffs[0].line, 2);
        assert_eq!(rep.diffs[0].left, "1 SOUR A");
        assert_eq!(rep.diffs[0].right, "1 SOUR B");
        assert_eq!(rep.render(), "Line 2: - 1 SOUR A / + 1 SOUR B");
    }

    #[test]
    fn length_mismatch_pairs_extra_lines_with_sentinel() {
        let rep = compare("0 HEAD\n0 TRLR\n", "0 HEAD\n0 TRLR\n0 EXTRA\n0 MORE\n");
        assert!(!rep.equal);
        assert_eq!(rep.diffs.len(), 2);
        assert_eq!(rep.diffs[0].line, 3);
        assert_eq!(rep.diffs[0].left, MISSING_SENTINEL);
        assert_eq!(rep.diffs[0].right, "0 EXTRA");
        assert_eq!(rep.diffs[1].line, 4);
        assert_eq!(rep.diffs[1].left, MISSING_SENTINEL);
        assert_eq!(rep.diffs[1].right, "0 MORE");
    }

    #[test]
    fn equality_verdict_is_symmetric() {
        let a = "0 HEAD\n1 SOUR A\n0 TRLR\n";
        let b = "0 TRLR\n0 HEAD\n1 SOUR A\n";
        assert_eq!(compare(a, b).equal, compare(b, a).equal);
        assert_eq!(compare(a, a).equal, compare(a, a).equal);
    }

    #[test]
    fn matching_lines_produce_no_entries() {
        let rep = compare(
            "0 HEAD\n1 SOUR A\n1 DATE X\n0 TRLR\n",
            "0 HEAD\n1 SOUR A\n1 DATE Y\n0 TRLR\n",
        );
        assert_eq!(rep.diffs.len(), 1);
        assert_eq!(rep.diffs[0].line, 3);
    }

    #[test]
    fn custom_policy_flows_through() {
        let policy = HeaderPolicy::with_preferred(["1 SOUR", "1 CHAR"]);
        let rep = compare_with_policy(
            "0 HEAD\n1 CHAR U\n1 SOUR A\n",
            "0 HEAD\n1 SOUR A\n1 CHAR U\n",
            &policy,
        );
        assert!(rep.equal);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serializes_to_json() {
        let rep = compare("0 HEAD\n1 SOUR A\n", "0 HEAD\n1 SOUR B\n");
        let json = serde_json::to_value(&rep).unwrap();
        assert_eq!(json["equal"], false);
        assert_eq!(json["diffs"][0]["line"], 2);
    }
}
