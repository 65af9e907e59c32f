//! Byte-to-text decoding for snapshot and converter output.

/// Decode bytes as UTF-8, dropping invalid sequences.
///
/// The legacy converters occasionally emit stray non-UTF-8 bytes in NOTE
/// payloads; both sides of a comparison are decoded the same way, so
/// dropping (rather than replacing) keeps the decoded texts aligned.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                out.push_str(s);
                return out;
            }
            Err(e) => {
                let valid = e.valid_up_to();
                // Safety: valid_up_to guarantees this prefix is UTF-8.
                out.push_str(unsafe { std::str::from_utf8_unchecked(&rest[..valid]) });
                let skip = e.error_len().unwrap_or(rest.len() - valid);
                rest = &rest[valid + skip..];
                if rest.is_empty() {
                    return out;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_utf8_passes_through() {
        assert_eq!(decode_dropping_invalid("0 HEAD\n".as_bytes()), "0 HEAD\n");
    }

    #[test]
    fn invalid_bytes_are_dropped_not_replaced() {
        let bytes = b"0 NOTE caf\xe9 au lait\n";
        assert_eq!(decode_dropping_invalid(bytes), "0 NOTE caf au lait\n");
    }

    #[test]
    fn truncated_multibyte_at_end_dropped() {
        let bytes = b"abc\xc3";
        assert_eq!(decode_dropping_invalid(bytes), "abc");
    }

    #[test]
    fn multiple_invalid_runs() {
        let bytes = b"a\xffb\xfe\xffc";
        assert_eq!(decode_dropping_invalid(bytes), "abc");
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode_dropping_invalid(b""), "");
    }
}
