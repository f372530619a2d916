//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --quiet) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::MissingPolicy;

/// htmlconst - embed HTML assets in firmware as header constants
#[derive(Parser, Debug)]
#[command(name = "htmlconst")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the asset list comes from, shared by `build` and `check`
#[derive(Args, Debug, Clone, Default)]
pub struct AssetArgs {
    /// Config file (default: ./htmlconst.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory headers are written to
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Embed every .html/.htm file under DIR
    #[arg(long, value_name = "DIR")]
    pub scan: Option<PathBuf>,

    /// Raw string delimiter (default: ====)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Assets to embed, as PATH or PATH=IDENTIFIER
    #[arg(value_name = "ASSET")]
    pub assets: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one PROGMEM raw-string header per asset
    Build {
        #[command(flatten)]
        assets: AssetArgs,

        /// What to do when an input file is missing
        #[arg(long, value_enum)]
        on_missing: Option<MissingPolicy>,
    },

    /// Print line-by-line string statements for one file
    Lines {
        /// HTML file to convert
        file: PathBuf,

        /// Config file (default: ./htmlconst.toml when present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Variable name to assign
        #[arg(long = "var", value_name = "NAME")]
        variable: Option<String>,

        /// Type used to declare the variable on the first line
        #[arg(long = "declare", value_name = "TYPE", conflicts_with = "no_declare")]
        declare_type: Option<String>,

        /// Assign without declaring
        #[arg(long)]
        no_declare: bool,
    },

    /// Verify generated headers match their inputs (exits 1 if not)
    Check {
        #[command(flatten)]
        assets: AssetArgs,
    },
}

impl Commands {
    /// Subcommand name as used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build { .. } => "build",
            Commands::Lines { .. } => "lines",
            Commands::Check { .. } => "check",
        }
    }
}

impl Cli {
    /// env_logger filter for the -v/-q flags
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (0, 0) => "warn",
            (_, 0) => "error",
            (_, 1) => "info,htmlconst=debug",
            (_, 2) => "debug",
            _ => "trace",
        }
    }
}
