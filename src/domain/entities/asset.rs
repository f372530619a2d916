//! SourceAsset entity - an HTML file to embed
//!
//! Built from the asset table (config, CLI arguments, or a directory scan)
//! and discarded once its header has been generated.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Identifier;

/// An input file paired with the identifier it is embedded under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    path: PathBuf,
    identifier: Identifier,
}

impl SourceAsset {
    pub fn new(path: impl Into<PathBuf>, identifier: Identifier) -> Self {
        Self {
            path: path.into(),
            identifier,
        }
    }

    /// Create an asset whose identifier is derived from the file name
    pub fn derived(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let identifier = Identifier::from_file_name(&file_name_of(&path));
        Self { path, identifier }
    }

    /// Parse a CLI asset argument: `PATH` or `PATH=IDENT`
    ///
    /// The text after the last `=` is an identifier only when it is a valid
    /// C identifier; otherwise the whole argument is a path (`a=b.html`).
    pub fn parse_arg(arg: &str) -> Self {
        match arg.rsplit_once('=') {
            Some((path, ident)) if !path.is_empty() => match Identifier::new(ident) {
                Ok(identifier) => Self::new(path, identifier),
                Err(_) => Self::derived(arg),
            },
            _ => Self::derived(arg),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// File name as written into the generated header comment
    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
