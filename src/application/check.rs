//! Check Use Case
//!
//! Regenerates every header in memory and compares it with what is on disk.
//! Nothing is written.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::domain::entities::SourceAsset;
use crate::domain::ports::FileSystem;
use crate::error::EmbedResult;

use super::build::{ensure_unique_destinations, render_artifact, BuildOptions};

/// State of one header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Header matches the regenerated text byte for byte
    UpToDate,
    /// Header differs; carries a unified diff (on disk -> regenerated)
    Stale { diff: String },
    /// Input exists but the header was never generated
    NotGenerated,
    /// Input file is missing
    Missing,
    /// Regenerating failed (read error, delimiter collision)
    Failed { error: String },
}

/// Result for one asset
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub identifier: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub status: CheckStatus,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
}

impl CheckResult {
    /// Every header is up to date
    pub fn is_success(&self) -> bool {
        self.items
            .iter()
            .all(|i| i.status == CheckStatus::UpToDate)
    }

    pub fn up_to_date_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.status == CheckStatus::UpToDate)
            .count()
    }
}

/// Check Use Case
pub struct CheckUseCase<FS> {
    fs: FS,
}

impl<FS: FileSystem> CheckUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(
        &self,
        assets: &[SourceAsset],
        options: &BuildOptions,
    ) -> EmbedResult<CheckResult> {
        if assets.is_empty() {
            return Err(crate::error::EmbedError::NoAssets);
        }
        ensure_unique_destinations(assets)?;

        let items = assets
            .iter()
            .map(|asset| self.check_one(asset, options))
            .collect();
        Ok(CheckResult { items })
    }

    fn check_one(&self, asset: &SourceAsset, options: &BuildOptions) -> CheckItem {
        let destination = options
            .out_dir
            .join(asset.identifier().header_file_name());
        let mut item = CheckItem {
            identifier: asset.identifier().to_string(),
            source: asset.path().to_path_buf(),
            destination: destination.clone(),
            status: CheckStatus::UpToDate,
        };

        if !self.fs.exists(asset.path()) {
            item.status = CheckStatus::Missing;
            return item;
        }

        let artifact = match render_artifact(&self.fs, asset, &options.out_dir, &options.style) {
            Ok(artifact) => artifact,
            Err(e) => {
                item.status = CheckStatus::Failed {
                    error: e.to_string(),
                };
                return item;
            }
        };

        if !self.fs.exists(&destination) {
            item.status = CheckStatus::NotGenerated;
            return item;
        }

        item.status = match self.fs.read_to_string(&destination) {
            Ok(current) if current == artifact.content() => CheckStatus::UpToDate,
            Ok(current) => CheckStatus::Stale {
                diff: generate_diff(&destination, &current, artifact.content()),
            },
            Err(e) => CheckStatus::Failed {
                error: e.to_string(),
            },
        };
        log::debug!("{}: {:?}", destination.display(), item.status);
        item
    }
}

/// Generate a unified diff between old and new content
fn generate_diff(path: &Path, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}
