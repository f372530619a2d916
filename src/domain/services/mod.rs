//! Domain Services
//!
//! Pure text transforms with no I/O: escaping and the two emitters.

mod escaping;
mod line_literal;
mod raw_block;

pub use escaping::{escape_line, unescape_line, EscapeMode};
pub use line_literal::{emit_line_literal, split_lines};
pub use raw_block::{
    emit_raw_block, extract_raw_block, validate_delimiter, RawBlockStyle, MAX_DELIMITER_LEN,
};
