//! EmittedArtifact entity - a generated header
//!
//! Produced from one SourceAsset and written once to its destination.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, Identifier};

/// Generated source text and where it goes
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedArtifact {
    identifier: Identifier,
    content: String,
    destination: PathBuf,
}

impl EmittedArtifact {
    pub fn new(identifier: Identifier, content: impl Into<String>, out_dir: &Path) -> Self {
        let destination = out_dir.join(identifier.header_file_name());
        Self {
            identifier,
            content: content.into(),
            destination,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }
}
