//! Raw-block emitter
//!
//! Produces a header that embeds the whole file in a C++ raw string literal
//! placed in flash:
//!
//! ```text
//! const char HTML_INDEX[] PROGMEM = R"====(
//! ...file content...
//! )====";
//! ```

use std::path::PathBuf;

use crate::domain::value_objects::Identifier;
use crate::error::{EmbedError, EmbedResult};

/// Longest delimiter the C++ grammar allows
pub const MAX_DELIMITER_LEN: usize = 16;

/// Boilerplate choices for generated headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlockStyle {
    /// Raw string delimiter placed between `"` and `(`
    pub delimiter: String,
    /// Header pulled in for the storage annotation (`Arduino.h`)
    pub platform_header: String,
    /// Storage placement annotation (`PROGMEM`); empty to omit
    pub storage_annotation: String,
    /// Shown in the "do not edit" comment
    pub regenerate_command: String,
}

impl Default for RawBlockStyle {
    fn default() -> Self {
        Self {
            delimiter: "====".to_string(),
            platform_header: "Arduino.h".to_string(),
            storage_annotation: "PROGMEM".to_string(),
            regenerate_command: "htmlconst build".to_string(),
        }
    }
}

impl RawBlockStyle {
    fn open(&self) -> String {
        format!("R\"{}(\n", self.delimiter)
    }

    fn close(&self) -> String {
        format!("\n){}\"", self.delimiter)
    }

    /// The sequence that must not occur in embedded content
    pub fn terminator(&self) -> String {
        format!("){}\"", self.delimiter)
    }
}

/// Check a raw string delimiter against the C++ rules
///
/// At most 16 characters from the basic source set, excluding space,
/// parentheses, backslash and control characters.
pub fn validate_delimiter(delimiter: &str) -> EmbedResult<()> {
    let valid = delimiter.len() <= MAX_DELIMITER_LEN
        && delimiter
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, '(' | ')' | '\\'));
    if valid {
        Ok(())
    } else {
        Err(EmbedError::InvalidDelimiter {
            delimiter: delimiter.to_string(),
        })
    }
}

/// Render a complete header for one asset
///
/// Fails with `DelimiterCollision` when `content` contains the closing
/// sequence of the raw literal.
pub fn emit_raw_block(
    content: &str,
    identifier: &Identifier,
    file_name: &str,
    style: &RawBlockStyle,
) -> EmbedResult<String> {
    validate_delimiter(&style.delimiter)?;
    if content.contains(&style.terminator()) {
        return Err(EmbedError::DelimiterCollision {
            file: PathBuf::from(file_name),
            delimiter: style.delimiter.clone(),
        });
    }

    let guard = identifier.guard();
    let annotation = if style.storage_annotation.is_empty() {
        String::new()
    } else {
        format!(" {}", style.storage_annotation)
    };

    let mut out = String::with_capacity(content.len() + 512);
    out.push_str(&format!("// Auto-generated from {}\n", file_name));
    out.push_str(&format!(
        "// Do not edit manually - regenerate with: {}\n\n",
        style.regenerate_command
    ));
    out.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
    out.push_str(&format!("#include <{}>\n\n", style.platform_header));
    out.push_str(&format!("const char {}[]{} = ", identifier, annotation));
    out.push_str(&style.open());
    out.push_str(content);
    out.push_str(&style.close());
    out.push_str(";\n\n");
    out.push_str(&format!("#endif // {}\n", guard));
    Ok(out)
}

/// Pull the embedded content back out of a generated header
///
/// Returns `None` when the header has no raw block with this delimiter.
pub fn extract_raw_block<'a>(header: &'a str, delimiter: &str) -> Option<&'a str> {
    let open = format!("R\"{}(\n", delimiter);
    let close = format!("\n){}\"", delimiter);
    let start = header.find(&open)? + open.len();
    let len = header[start..].find(&close)?;
    Some(&header[start..start + len])
}
