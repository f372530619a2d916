//! htmlconst - embed static HTML assets in firmware as source constants
//!
//! Two output forms are supported:
//! - a C/C++ header per asset holding a `PROGMEM` raw string literal
//! - line-by-line `String html = "...\n";` statements for one file
//!
//! The crate is layered: `domain` holds the escaping and emitting rules,
//! `application` drives batches over a `FileSystem` port, `infrastructure`
//! provides the local file system and event sinks.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase, CheckUseCase, LinesOptions};
pub use config::Config;
pub use domain::entities::{EmittedArtifact, SourceAsset};
pub use domain::services::{
    emit_line_literal, emit_raw_block, escape_line, extract_raw_block, unescape_line, EscapeMode,
    RawBlockStyle,
};
pub use domain::value_objects::{Identifier, MissingPolicy};
pub use error::{EmbedError, EmbedResult};
