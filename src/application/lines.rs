//! Lines Use Case
//!
//! Renders one input file as line-literal statements. Output goes to the
//! caller (stdout in the CLI); no file is written.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::services::{emit_line_literal, split_lines};
use crate::error::{EmbedError, EmbedResult};

/// Options for line-literal output
#[derive(Debug, Clone)]
pub struct LinesOptions {
    /// Variable the statements assign to
    pub variable: String,
    /// Type for the declaration on the first line (`String`), if any
    pub declare_type: Option<String>,
}

impl Default for LinesOptions {
    fn default() -> Self {
        Self {
            variable: "html".to_string(),
            declare_type: Some("String".to_string()),
        }
    }
}

/// Read `path` and render its statements
pub fn render_lines<FS: FileSystem + ?Sized>(
    fs: &FS,
    path: &Path,
    options: &LinesOptions,
) -> EmbedResult<String> {
    if !fs.exists(path) {
        return Err(EmbedError::MissingInputFile {
            path: path.to_path_buf(),
        });
    }
    let content = fs.read_to_string(path)?;
    let lines = split_lines(&content);
    log::debug!("{}: {} line(s)", path.display(), lines.len());
    Ok(emit_line_literal(
        &lines,
        &options.variable,
        options.declare_type.as_deref(),
    ))
}
