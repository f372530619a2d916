//! Property tests for the raw-block emitter.

use proptest::prelude::*;

use htmlconst::{emit_raw_block, extract_raw_block, EmbedError, Identifier, RawBlockStyle};

fn ident() -> Identifier {
    Identifier::new("HTML_INDEX").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extracting the raw block gives back the exact content.
    #[test]
    fn property_raw_block_round_trip(content in "(?s).{0,512}") {
        let style = RawBlockStyle::default();
        prop_assume!(!content.contains(&style.terminator()));

        let header = emit_raw_block(&content, &ident(), "index.html", &style).unwrap();
        prop_assert_eq!(extract_raw_block(&header, &style.delimiter), Some(content.as_str()));
    }

    /// PROPERTY: guards and declaration are present for any content.
    #[test]
    fn property_header_structure(content in "[ -~\n]{0,256}") {
        let style = RawBlockStyle::default();
        prop_assume!(!content.contains(&style.terminator()));

        let header = emit_raw_block(&content, &ident(), "index.html", &style).unwrap();
        prop_assert!(header.contains("#ifndef HTML_INDEX_H\n#define HTML_INDEX_H\n"));
        prop_assert!(header.contains("const char HTML_INDEX[] PROGMEM = R\"====(\n"));
        prop_assert!(header.ends_with(")====\";\n\n#endif // HTML_INDEX_H\n"));
    }

    /// PROPERTY: content holding the terminator is always rejected.
    #[test]
    fn property_collision_rejected(prefix in "[a-z]{0,16}", suffix in "[a-z]{0,16}") {
        let style = RawBlockStyle::default();
        let content = format!("{}{}{}", prefix, style.terminator(), suffix);

        let err = emit_raw_block(&content, &ident(), "index.html", &style).unwrap_err();
        let is_collision = matches!(err, EmbedError::DelimiterCollision { .. });
        prop_assert!(is_collision);
    }
}
