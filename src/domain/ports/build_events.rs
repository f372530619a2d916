//! Build Event Port
//!
//! Observable interface for build operations, used for console progress
//! lines and the NDJSON event stream.

use std::path::PathBuf;

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Build started
    Started { asset_count: usize, out_dir: PathBuf },

    /// Header written
    Written {
        identifier: String,
        source: PathBuf,
        destination: PathBuf,
        bytes: usize,
        hash: String,
    },

    /// Input file does not exist; the asset was skipped
    Missing { source: PathBuf },

    /// Asset could not be generated (read, write or delimiter error)
    Failed { source: PathBuf, error: String },

    /// Build completed
    Completed {
        written_count: usize,
        missing_count: usize,
        failed_count: usize,
        out_dir: PathBuf,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - `ConsoleEventSink`: one line per asset plus a summary
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait BuildEventSink {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}

/// Collects events in memory
#[derive(Default)]
pub struct RecordingEventSink {
    events: std::sync::Mutex<Vec<BuildEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BuildEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl BuildEventSink for RecordingEventSink {
    fn on_event(&self, event: BuildEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
