//! Error types for htmlconst
//!
//! Library code returns `EmbedResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for htmlconst operations
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Main error type for htmlconst operations
#[derive(Error, Debug)]
pub enum EmbedError {
    /// A configured input file does not exist
    #[error("missing input file: {}", path.display())]
    MissingInputFile { path: PathBuf },

    /// One or more inputs missing while running with `on_missing = "abort"`
    #[error("{} input file(s) missing: {}", paths.len(), join_paths(paths))]
    MissingInputs { paths: Vec<PathBuf> },

    /// The input contains the raw-literal terminator, so it cannot be embedded verbatim
    #[error("{} contains the raw string terminator '){delimiter}\"'", file.display())]
    DelimiterCollision { file: PathBuf, delimiter: String },

    /// Raw-string delimiter rejected by the C++ grammar
    #[error("invalid raw string delimiter '{delimiter}'")]
    InvalidDelimiter { delimiter: String },

    /// Not a valid C identifier
    #[error("invalid identifier '{name}' - must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidIdentifier { name: String },

    /// Two assets would write the same header
    #[error("identifier '{identifier}' is used by more than one asset")]
    DuplicateIdentifier { identifier: String },

    /// Nothing to do
    #[error("no assets configured - pass files, --scan DIR, or add [[assets]] to htmlconst.toml")]
    NoAssets,

    /// Configuration file could not be parsed
    #[error("invalid config {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
