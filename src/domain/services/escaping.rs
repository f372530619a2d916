//! Escaping for quoted C string literals
//!
//! Replacement order matters: backslashes first, so the backslashes added
//! for quotes are not doubled again.

/// Which literal form the escaped text ends up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// `"..."` statements built line by line; single quotes are escaped too
    LineLiteral,
    /// Raw-block headers; single quotes are left alone
    RawBlock,
}

/// Escape one line (no embedded `\n`) for a double-quoted literal
///
/// Escapes: backslash, double quote, and in `LineLiteral` mode single quote
pub fn escape_line(line: &str, mode: EscapeMode) -> String {
    let escaped = line.replace('\\', "\\\\").replace('"', "\\\"");
    match mode {
        EscapeMode::LineLiteral => escaped.replace('\'', "\\'"),
        EscapeMode::RawBlock => escaped,
    }
}

/// Reverse `escape_line`
///
/// `\\`, `\"` and `\'` collapse to the escaped character. Any other
/// backslash is copied through unchanged.
pub fn unescape_line(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '\\' | '"' | '\'') {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
