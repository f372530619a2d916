//! Property tests for line escaping.

use proptest::prelude::*;

use htmlconst::{escape_line, unescape_line, EscapeMode};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: unescaping an escaped line gives back the line.
    #[test]
    fn property_escape_round_trip(line in "[^\n]{0,128}") {
        let escaped = escape_line(&line, EscapeMode::LineLiteral);
        prop_assert_eq!(unescape_line(&escaped), line);
    }

    /// PROPERTY: every quote in an escaped line is preceded by a backslash.
    ///
    /// Guards against an unescaped `"` ending the C string literal early.
    #[test]
    fn property_no_bare_quotes(line in "[^\n]{0,128}") {
        let escaped = escape_line(&line, EscapeMode::LineLiteral);
        let bytes = escaped.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'\\' {
                i += 2;
                continue;
            }
            prop_assert!(bytes[i] != b'"' && bytes[i] != b'\'', "bare quote in {:?}", escaped);
            i += 1;
        }
    }

    /// PROPERTY: raw-block mode leaves single quotes alone.
    #[test]
    fn property_raw_block_mode_keeps_single_quotes(line in "[a-z' ]{0,64}") {
        prop_assert_eq!(escape_line(&line, EscapeMode::RawBlock), line);
    }
}
