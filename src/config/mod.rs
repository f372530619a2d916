//! Configuration module for htmlconst
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (HTMLCONST_*)
//! 3. Config file (`--config` or ./htmlconst.toml)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{load_or_default, ConfigWarning, LoadedConfig, DEFAULT_CONFIG_FILE};
pub use types::{AssetEntry, Config, LineLiteralConfig, OutputConfig, RawBlockConfig};
