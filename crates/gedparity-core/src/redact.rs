//! Volatile-field redaction.
//!
//! Converter runs embed run-specific noise in a handful of header fields:
//! the export timestamp and the output file path. Redaction replaces such
//! lines wholesale with a fixed value before comparison, so two runs of the
//! same converter over the same database compare equal.
//!
//! Redaction is line-wise and pure; it composes with canonicalization in
//! either order.

/// A single redaction rule: lines starting with `prefix` are replaced by
/// `replacement` in full.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedactRule {
    pub prefix: String,
    pub replacement: String,
}

impl RedactRule {
    pub fn new(prefix: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            replacement: replacement.into(),
        }
    }
}

/// Default rules for GEDCOM exports: export time and output filename.
pub fn default_rules() -> Vec<RedactRule> {
    vec![
        RedactRule::new("2 TIME ", "2 TIME 00:00:00"),
        RedactRule::new("1 FILE ", "1 FILE snapshot.ged"),
    ]
}

/// Apply redaction rules line by line.
///
/// The first matching rule wins. Line terminators are preserved as-is; this
/// function does not canonicalize.
pub fn redact(text: &str, rules: &[RedactRule]) -> String {
    if rules.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        let (line, tail) = match rest.split_once('\n') {
            Some((line, tail)) => (line, Some(tail)),
            None => (rest, None),
        };

        match rules.iter().find(|r| line.starts_with(r.prefix.as_str())) {
            Some(rule) => out.push_str(&rule.replacement),
            None => out.push_str(line),
        }
        if tail.is_some() {
            out.push('\n');
        }
        rest = tail.unwrap_or("");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;

    #[test]
    fn default_rules_mask_time_and_file() {
        let text = "0 HEAD\n1 DATE 1 JAN 2026\n2 TIME 13:37:42\n1 FILE /tmp/run-91f2.ged\n0 TRLR\n";
        let r = redact(text, &default_rules());
        assert_eq!(
            r,
            "0 HEAD\n1 DATE 1 JAN 2026\n2 TIME 00:00:00\n1 FILE snapshot.ged\n0 TRLR\n"
        );
    }

    #[test]
    fn no_rules_is_identity() {
        let text = "0 HEAD\n2 TIME 13:37:42\n";
        assert_eq!(redact(text, &[]), text);
    }

    #[test]
    fn unmatched_lines_untouched() {
        let text = "0 HEAD\n1 SOUR GeneWeb\n0 TRLR\n";
        assert_eq!(redact(text, &default_rules()), text);
    }

    #[test]
    fn missing_final_newline_preserved() {
        let r = redact("2 TIME 09:00:00", &default_rules());
        assert_eq!(r, "2 TIME 00:00:00");
    }

    #[test]
    fn composes_with_canonicalize_in_either_order() {
        let text = "0 HEAD\n1 FILE a.ged   \n1 CHAR UTF-8\n\n0 TRLR\n";
        let rules = default_rules();
        let a = canonicalize(&redact(text, &rules));
        let b = redact(&canonicalize(text), &rules);
        assert_eq!(a, b);
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = vec![
            RedactRule::new("1 FILE ", "1 FILE first"),
            RedactRule::new("1 FILE a", "1 FILE second"),
        ];
        assert_eq!(redact("1 FILE a.ged\n", &rules), "1 FILE first\n");
    }
}
