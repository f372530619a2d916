//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer handles all I/O.
//!
//! - `fs/` - local (atomic) and mock file systems
//! - `events/` - console and NDJSON build event sinks
//! - `scan` - directory scan for HTML assets

pub mod events;
pub mod fs;
pub mod scan;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use scan::scan_html_assets;
