//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the build and check drivers run against the local disk or an
//! in-memory mock.

use std::path::Path;

use crate::error::EmbedResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory, for tests
pub trait FileSystem {
    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> EmbedResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write_atomic(&self, path: &Path, content: &str) -> EmbedResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}
