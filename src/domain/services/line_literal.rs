//! Line-literal emitter
//!
//! Turns a text file into statements that rebuild it one line at a time:
//!
//! ```text
//! String html = "<!DOCTYPE html>\n";
//! html += "<html>\n";
//! ```

use super::escaping::{escape_line, EscapeMode};

/// Split text into lines exactly as the emitter sees them
///
/// Splits on `\n` only. A trailing newline yields a final empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Emit one statement per line, first an assignment then appends
///
/// With `declare_type` set the first statement also declares the variable
/// (`String html = ...`). Every statement ends with a newline.
pub fn emit_line_literal<S: AsRef<str>>(
    lines: &[S],
    variable: &str,
    declare_type: Option<&str>,
) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let escaped = escape_line(line.as_ref(), EscapeMode::LineLiteral);
        if i == 0 {
            if let Some(ty) = declare_type {
                out.push_str(ty);
                out.push(' ');
            }
            out.push_str(&format!("{} = \"{}\\n\";\n", variable, escaped));
        } else {
            out.push_str(&format!("{} += \"{}\\n\";\n", variable, escaped));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_emit_declares_first_line() {
        let out = emit_line_literal(&["<html>", "</html>"], "html", Some("String"));
        assert_eq!(
            out,
            "String html = \"<html>\\n\";\nhtml += \"</html>\\n\";\n"
        );
    }

    #[test]
    fn test_emit_without_declaration() {
        let out = emit_line_literal(&["a"], "page", None);
        assert_eq!(out, "page = \"a\\n\";\n");
    }

    #[test]
    fn test_emit_escapes_each_line() {
        let out = emit_line_literal(&[r#"<a href="x">it's</a>"#], "html", None);
        assert_eq!(out, "html = \"<a href=\\\"x\\\">it\\'s</a>\\n\";\n");
    }

    #[test]
    fn test_emit_empty_sequence() {
        let lines: [&str; 0] = [];
        assert_eq!(emit_line_literal(&lines, "html", None), "");
    }
}
