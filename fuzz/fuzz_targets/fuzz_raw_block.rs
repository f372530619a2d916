#![no_main]

use htmlconst::{emit_raw_block, extract_raw_block, Identifier, RawBlockStyle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let style = RawBlockStyle::default();
        let ident = Identifier::from_file_name("index.html");
        // Colliding content must be rejected, anything else must round-trip
        match emit_raw_block(content, &ident, "index.html", &style) {
            Ok(header) => {
                assert_eq!(extract_raw_block(&header, &style.delimiter), Some(content));
            }
            Err(_) => assert!(content.contains(&style.terminator())),
        }
    }
});
