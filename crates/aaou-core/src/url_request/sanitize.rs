//! Whitespace stripping and scheme detection on raw script input.

/// Bytes removed from script input before assembly.
const URL_WHITESPACE: [u8; 4] = [b' ', b'\t', b'\n', b'\r'];

/// Removes space, tab, `\n` and `\r` anywhere in `raw`, keeping the order of
/// everything else.
///
/// Other bytes (including non-ASCII and other control characters) are kept
/// as-is; the browser decides what to do with them.
pub fn strip_url_whitespace(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .copied()
        .filter(|b| !URL_WHITESPACE.contains(b))
        .collect()
}

/// True if the fragment already carries a scheme: a leading `:` or a `://` anywhere.
///
/// `://` is matched anywhere, so a fragment embedding an encoded URL in its
/// query (`x.com/?next=https://y`) is rejected too.
pub fn has_protocol_specifier(fragment: &[u8]) -> bool {
    fragment.first() == Some(&b':') || fragment.windows(3).any(|w| w == b"://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_four_whitespace_bytes() {
        assert_eq!(strip_url_whitespace(b" a\tb\nc\r d "), b"abcd");
    }

    #[test]
    fn keeps_other_bytes_in_order() {
        assert_eq!(
            strip_url_whitespace("exa mple.com/ü?q=1\x0b".as_bytes()),
            "example.com/ü?q=1\x0b".as_bytes()
        );
    }

    #[test]
    fn stripping_is_idempotent() {
        for input in ["", "   ", "a b", " example.com/page ", "x\t\r\ny"] {
            let once = strip_url_whitespace(input.as_bytes());
            assert_eq!(strip_url_whitespace(&once), once, "input={input:?}");
        }
    }

    #[test]
    fn leading_colon_is_a_specifier() {
        assert!(has_protocol_specifier(b":foo"));
        assert!(!has_protocol_specifier(b"foo:8080"));
    }

    #[test]
    fn scheme_separator_anywhere_is_a_specifier() {
        assert!(has_protocol_specifier(b"http://example.com"));
        assert!(has_protocol_specifier(b"example.com/?next=https://other"));
        assert!(!has_protocol_specifier(b"example.com/a:/b"));
        assert!(!has_protocol_specifier(b"//example.com"));
    }

    #[test]
    fn empty_fragment_has_no_specifier() {
        assert!(!has_protocol_specifier(b""));
    }
}
