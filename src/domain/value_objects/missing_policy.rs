//! Missing Policy Value Object
//!
//! What a build does when a configured input file does not exist.

use serde::Deserialize;

/// Policy for missing input files
///
/// - `Skip`: report the missing file, keep generating the rest (default)
/// - `Abort`: check every input first and write nothing if any is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Report and continue with the remaining assets
    #[default]
    Skip,
    /// Fail the whole batch before writing anything
    Abort,
}

impl MissingPolicy {
    /// Parse a policy name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "skip" | "continue" => Some(Self::Skip),
            "abort" | "fail" => Some(Self::Abort),
            _ => None,
        }
    }
}
