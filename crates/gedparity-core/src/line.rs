//! Line classification for GEDCOM-like documents.
//!
//! Every datum in the interchange format is a line of the shape
//! `<level> <tag> [rest]`, with single ASCII spaces as delimiters. This
//! module is the one place that knows that shape; the canonicalizer and any
//! future stricter parser share it instead of repeating ad-hoc prefix scans.
//!
//! Classification is deliberately strict about the literal form: levels are
//! plain decimal with no leading zeros and delimiters are single spaces, so
//! `is_record_start` coincides exactly with a literal `"0 "` prefix test.
//! Anything that does not match is not an error; the canonicalizer passes
//! unclassifiable lines through verbatim.

/// A classified line: level number, tag, and the remainder (if any).
///
/// `tag` may be empty for degenerate lines like `"0 "`; such lines still
/// classify (they open a record per the literal prefix rule) but carry no
/// usable tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    pub level: u8,
    pub tag: &'a str,
    pub rest: Option<&'a str>,
}

impl TaggedLine<'_> {
    /// True if this line opens a new record (level 0).
    pub fn is_record_start(&self) -> bool {
        self.level == 0
    }
}

/// Classify a line into level, tag, and rest.
///
/// Returns `None` for lines that do not start with `<level><space>` in the
/// literal GEDCOM shape (non-digit level token, leading zeros, tab or missing
/// delimiter).
pub fn classify(line: &str) -> Option<TaggedLine<'_>> {
    let (level_token, remainder) = line.split_once(' ')?;
    let level = parse_level(level_token)?;

    match remainder.split_once(' ') {
        Some((tag, rest)) => Some(TaggedLine {
            level,
            tag,
            rest: Some(rest),
        }),
        None => Some(TaggedLine {
            level,
            tag: remainder,
            rest: None,
        }),
    }
}

/// True if the line opens a record, i.e. begins with a literal `0 `.
pub fn is_record_start(line: &str) -> bool {
    classify(line).is_some_and(|t| t.is_record_start())
}

/// Parse a level token. Plain decimal, no sign, no leading zeros.
fn parse_level(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_header_start() {
        let t = classify("0 HEAD").unwrap();
        assert_eq!(t.level, 0);
        assert_eq!(t.tag, "HEAD");
        assert_eq!(t.rest, None);
        assert!(t.is_record_start());
    }

    #[test]
    fn classify_field_with_rest() {
        let t = classify("1 CHAR UTF-8").unwrap();
        assert_eq!(t.level, 1);
        assert_eq!(t.tag, "CHAR");
        assert_eq!(t.rest, Some("UTF-8"));
        assert!(!t.is_record_start());
    }

    #[test]
    fn classify_cross_reference_record() {
        let t = classify("0 @I1@ INDI").unwrap();
        assert_eq!(t.level, 0);
        assert_eq!(t.tag, "@I1@");
        assert_eq!(t.rest, Some("INDI"));
    }

    #[test]
    fn malformed_lines_do_not_classify() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("HEAD"), None);
        assert_eq!(classify("0"), None);
        assert_eq!(classify("0\tHEAD"), None);
        assert_eq!(classify("x HEAD"), None);
        assert_eq!(classify("-1 HEAD"), None);
    }

    #[test]
    fn leading_zero_levels_do_not_classify() {
        // A literal "0 " prefix test would reject these too.
        assert_eq!(classify("00 HEAD"), None);
        assert_eq!(classify("01 CHAR UTF-8"), None);
    }

    #[test]
    fn record_start_matches_literal_prefix_rule() {
        assert!(is_record_start("0 HEAD"));
        assert!(is_record_start("0 TRLR"));
        assert!(is_record_start("0 @F1@ FAM"));
        assert!(!is_record_start("1 SOUR GeneWeb"));
        assert!(!is_record_start("0"));
        assert!(!is_record_start("00 HEAD"));
    }
}
