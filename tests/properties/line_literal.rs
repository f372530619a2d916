//! Property tests for the line-literal emitter.

use proptest::prelude::*;

use htmlconst::domain::services::split_lines;
use htmlconst::{emit_line_literal, unescape_line};

/// Recover the text a compiler would build from the statements
fn reconstruct(statements: &str) -> String {
    let mut out = String::new();
    for stmt in statements.lines() {
        let start = stmt.find('"').expect("statement has a literal") + 1;
        let end = stmt.len() - "\\n\";".len();
        out.push_str(&unescape_line(&stmt[start..end]));
        out.push('\n');
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one statement per input line, first declares, rest append.
    #[test]
    fn property_statement_per_line(content in "[ -~\n]{0,256}") {
        let lines = split_lines(&content);
        let out = emit_line_literal(&lines, "html", Some("String"));
        let statements: Vec<&str> = out.lines().collect();

        prop_assert_eq!(statements.len(), lines.len());
        prop_assert!(statements[0].starts_with("String html = \""));
        for stmt in &statements[1..] {
            prop_assert!(stmt.starts_with("html += \""));
        }
    }

    /// PROPERTY: the statements rebuild the input plus one trailing newline.
    #[test]
    fn property_reconstructs_content(content in "[ -~\n]{0,256}") {
        let lines = split_lines(&content);
        let out = emit_line_literal(&lines, "html", None);
        prop_assert_eq!(reconstruct(&out), format!("{}\n", content));
    }
}
