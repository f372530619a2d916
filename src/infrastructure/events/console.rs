//! Console Event Sink
//!
//! Human-readable build progress: one line per asset and a summary.
//! Successes go to stdout, missing and failed assets to stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{BuildEvent, BuildEventSink};
use crate::ui::TerminalCapabilities;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            arrow: "->",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            arrow: "->",
        }
    }
}

/// Event sink printing progress lines
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    icons: Icons,
    color: bool,
    total: Mutex<usize>,
}

impl ConsoleEventSink {
    /// Console sink on stdout/stderr
    pub fn new(caps: TerminalCapabilities) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), caps)
    }

    /// Console sink on custom writers (for testing)
    pub fn with_writers<O, E>(out: O, err: E, caps: TerminalCapabilities) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            icons: if caps.supports_unicode {
                Icons::unicode()
            } else {
                Icons::ascii()
            },
            color: caps.supports_color,
            total: Mutex::new(0),
        }
    }

    fn ok_icon(&self) -> String {
        if self.color {
            self.icons.check.green().to_string()
        } else {
            self.icons.check.to_string()
        }
    }

    fn fail_icon(&self) -> String {
        if self.color {
            self.icons.cross.red().to_string()
        } else {
            self.icons.cross.to_string()
        }
    }

    fn print_out(&self, line: String) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn print_err(&self, line: String) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started { asset_count, .. } => {
                if let Ok(mut total) = self.total.lock() {
                    *total = asset_count;
                }
            }
            BuildEvent::Written {
                identifier,
                destination,
                bytes,
                ..
            } => self.print_out(format!(
                "{} {} {} {} ({} bytes)",
                self.ok_icon(),
                identifier,
                self.icons.arrow,
                destination.display(),
                bytes
            )),
            BuildEvent::Missing { source } => self.print_err(format!(
                "{} missing input file: {}",
                self.fail_icon(),
                source.display()
            )),
            BuildEvent::Failed { source, error } => self.print_err(format!(
                "{} failed to generate {}: {}",
                self.fail_icon(),
                source.display(),
                error
            )),
            BuildEvent::Completed {
                written_count,
                out_dir,
                ..
            } => {
                let total = self.total.lock().map(|t| *t).unwrap_or(written_count);
                self.print_out(format!(
                    "Generated {} of {} headers in {}",
                    written_count,
                    total,
                    out_dir.display()
                ));
            }
        }
    }
}
