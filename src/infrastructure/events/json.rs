//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert a build event to its NDJSON representation
pub fn event_to_json(event: BuildEvent) -> serde_json::Value {
    match event {
        BuildEvent::Started {
            asset_count,
            out_dir,
        } => serde_json::json!({
            "event": "start",
            "command": "build",
            "version": env!("CARGO_PKG_VERSION"),
            "asset_count": asset_count,
            "out_dir": out_dir.display().to_string(),
        }),

        BuildEvent::Written {
            identifier,
            source,
            destination,
            bytes,
            hash,
        } => serde_json::json!({
            "event": "artifact",
            "command": "build",
            "identifier": identifier,
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
            "bytes": bytes,
            "hash": hash,
        }),

        BuildEvent::Missing { source } => serde_json::json!({
            "event": "missing",
            "command": "build",
            "source": source.display().to_string(),
        }),

        BuildEvent::Failed { source, error } => serde_json::json!({
            "event": "error",
            "command": "build",
            "source": source.display().to_string(),
            "error": error,
        }),

        BuildEvent::Completed {
            written_count,
            missing_count,
            failed_count,
            out_dir,
        } => serde_json::json!({
            "event": "complete",
            "command": "build",
            "success": missing_count == 0 && failed_count == 0,
            "written": written_count,
            "missing": missing_count,
            "failed": failed_count,
            "out_dir": out_dir.display().to_string(),
        }),
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.write_event(event_to_json(event));
    }
}
