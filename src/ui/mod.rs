//! Terminal helpers for console output

pub mod terminal;

pub use terminal::{detect_capabilities, TerminalCapabilities};
