#![no_main]

use htmlconst::{escape_line, unescape_line, EscapeMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let escaped = escape_line(line, EscapeMode::LineLiteral);
        assert_eq!(unescape_line(&escaped), line);
        let _ = escape_line(line, EscapeMode::RawBlock);
    }
});
