//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod build_events;
pub mod file_system;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink, RecordingEventSink};
pub use file_system::FileSystem;
