//! Presentation Layer
//!
//! CLI parsing and result rendering.

pub mod cli;
pub mod output;

pub use cli::{AssetArgs, Cli, Commands};
pub use output::{
    render_check_json, render_check_text, render_config_warnings, render_error_json,
    render_lines_json,
};
