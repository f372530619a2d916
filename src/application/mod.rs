//! Application Layer
//!
//! Use cases that orchestrate reading assets, running the domain
//! transforms, and writing or comparing results.
//!
//! - `BuildUseCase` - generate raw-block headers for a batch of assets
//! - `CheckUseCase` - verify headers on disk match their inputs
//! - `render_lines` - line-literal statements for one file

pub mod build;
pub mod check;
pub mod lines;

pub use build::{render_artifact, BuildOptions, BuildOutcome, BuildResult, BuildUseCase};
pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use lines::{render_lines, LinesOptions};
