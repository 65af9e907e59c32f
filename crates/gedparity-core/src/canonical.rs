//! Canonicalization of GEDCOM-like documents.
//!
//! This module defines the deterministic normal form used as the basis for
//! every comparison in gedparity. Two exports that differ only in blank
//! lines, trailing whitespace, or header-field ordering canonicalize to
//! byte-identical text.
//!
//! Goals:
//! - identical logical documents yield identical canonical output
//! - avoid platform-specific newline and encoding differences
//! - remain purely in-memory (no I/O)
//!
//! Canonicalization is total: it never fails, for any input, including empty
//! input and input without a header record. Malformed lines pass through
//! verbatim; this is a best-effort normalizer for comparison, not a
//! validating parser.

use std::borrow::Cow;

use crate::config::{HeaderPolicy, HEADER_START_PREFIX};
use crate::line;

/// Canonicalize a document under the default header policy.
///
/// Rules:
/// - remove UTF-8 BOM if present, convert CRLF and CR to LF
/// - trim trailing whitespace on each line
/// - drop lines that are empty after trimming
/// - if the first surviving line starts with `0 HEAD`, reorder the header
///   record's fields per the policy (stable partition, see
///   [`reorder_header_fields`])
/// - join with LF and terminate with exactly one trailing LF
pub fn canonicalize(text: &str) -> String {
    canonicalize_with_policy(text, &HeaderPolicy::default())
}

/// Canonicalize under an explicit header policy.
///
/// The policy is assumed valid; callers constructing a custom policy should
/// run it through [`crate::config::validate_policy`] first. An invalid policy cannot make
/// this function fail, it can only make the reordering do less than intended.
pub fn canonicalize_with_policy(text: &str, policy: &HeaderPolicy) -> String {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let normalized: Cow<'_, str> = if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    };

    let lines: Vec<&str> = normalized
        .split('\n')
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();

    // Headerless or empty documents pass through without reordering.
    if !lines
        .first()
        .is_some_and(|first| first.starts_with(HEADER_START_PREFIX))
    {
        return join_canonical(&lines);
    }

    // Header extent: line 0 up to the next record start (or EOF).
    let header_end = lines[1..]
        .iter()
        .position(|l| line::is_record_start(l))
        .map_or(lines.len(), |i| i + 1);

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.push(lines[0]);
    out.extend(reorder_header_fields(&lines[1..header_end], policy));
    out.extend(&lines[header_end..]);

    join_canonical(&out)
}

/// Reorder header field lines by stable multi-pass partition.
///
/// For each preferred prefix in policy order, every remaining field whose
/// text starts with that prefix moves to the output, preserving relative
/// order among themselves. Fields matching no prefix are appended afterward
/// in original relative order. This is deliberately a partition and not a
/// sort: repeated occurrences of the same tag never reorder relative to each
/// other.
fn reorder_header_fields<'a>(fields: &[&'a str], policy: &HeaderPolicy) -> Vec<&'a str> {
    let mut remaining: Vec<&str> = fields.to_vec();
    let mut ordered: Vec<&str> = Vec::with_capacity(fields.len());

    for prefix in &policy.preferred {
        let mut rest = Vec::with_capacity(remaining.len());
        for field in remaining {
            if field.starts_with(prefix.as_str()) {
                ordered.push(field);
            } else {
                rest.push(field);
            }
        }
        remaining = rest;
    }

    ordered.extend(remaining);
    ordered
}

/// Join canonical lines with LF and exactly one trailing LF.
///
/// The empty document canonicalizes to `"\n"`.
fn join_canonical(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
