//! Build Use Case
//!
//! Generates one raw-block header per asset. Assets are independent: a
//! missing or broken input is reported and the rest of the batch still runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{EmittedArtifact, SourceAsset};
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem};
use crate::domain::services::{emit_raw_block, validate_delimiter, RawBlockStyle};
use crate::domain::value_objects::MissingPolicy;
use crate::error::{EmbedError, EmbedResult};

/// Options for the build operation
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory headers are written to
    pub out_dir: PathBuf,
    /// Header boilerplate
    pub style: RawBlockStyle,
    /// What to do when an input is missing
    pub on_missing: MissingPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("include"),
            style: RawBlockStyle::default(),
            on_missing: MissingPolicy::default(),
        }
    }
}

/// What happened to one asset
#[derive(Debug)]
pub enum BuildOutcome {
    Written {
        source: PathBuf,
        artifact: EmittedArtifact,
    },
    Missing {
        source: PathBuf,
    },
    Failed {
        source: PathBuf,
        error: EmbedError,
    },
}

/// Result of the build operation, one outcome per asset in input order
#[derive(Debug, Default)]
pub struct BuildResult {
    pub outcomes: Vec<BuildOutcome>,
}

impl BuildResult {
    pub fn written(&self) -> impl Iterator<Item = &EmittedArtifact> {
        self.outcomes.iter().filter_map(|o| match o {
            BuildOutcome::Written { artifact, .. } => Some(artifact),
            _ => None,
        })
    }

    pub fn missing(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            BuildOutcome::Missing { source } => Some(source.as_path()),
            _ => None,
        })
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BuildOutcome::Failed { .. }))
            .count()
    }

    /// Every asset was written
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o, BuildOutcome::Written { .. }))
    }
}

/// Read one asset and render its header without writing it
pub fn render_artifact<FS: FileSystem + ?Sized>(
    fs: &FS,
    asset: &SourceAsset,
    out_dir: &Path,
    style: &RawBlockStyle,
) -> EmbedResult<EmittedArtifact> {
    let content = fs.read_to_string(asset.path())?;
    let header = emit_raw_block(&content, asset.identifier(), &asset.file_name(), style)
        .map_err(|e| match e {
            // report the full input path rather than the bare file name
            EmbedError::DelimiterCollision { delimiter, .. } => EmbedError::DelimiterCollision {
                file: asset.path().to_path_buf(),
                delimiter,
            },
            other => other,
        })?;
    Ok(EmittedArtifact::new(
        asset.identifier().clone(),
        header,
        out_dir,
    ))
}

/// Reject batches where two assets would write the same header
pub fn ensure_unique_destinations(assets: &[SourceAsset]) -> EmbedResult<()> {
    let mut seen = HashSet::new();
    for asset in assets {
        if !seen.insert(asset.identifier().header_file_name()) {
            return Err(EmbedError::DuplicateIdentifier {
                identifier: asset.identifier().to_string(),
            });
        }
    }
    Ok(())
}

/// Build Use Case
pub struct BuildUseCase<FS> {
    fs: FS,
}

impl<FS: FileSystem> BuildUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Execute the build
    ///
    /// Returns `Err` only for problems with the batch as a whole: no assets,
    /// duplicate identifiers, an invalid delimiter, or missing inputs under
    /// `MissingPolicy::Abort`. Per-asset problems are recorded as outcomes.
    pub fn execute(
        &self,
        assets: &[SourceAsset],
        options: &BuildOptions,
        events: &dyn BuildEventSink,
    ) -> EmbedResult<BuildResult> {
        if assets.is_empty() {
            return Err(EmbedError::NoAssets);
        }
        ensure_unique_destinations(assets)?;
        validate_delimiter(&options.style.delimiter)?;

        if options.on_missing == MissingPolicy::Abort {
            let missing: Vec<PathBuf> = assets
                .iter()
                .filter(|a| !self.fs.exists(a.path()))
                .map(|a| a.path().to_path_buf())
                .collect();
            if !missing.is_empty() {
                return Err(EmbedError::MissingInputs { paths: missing });
            }
        }

        events.on_event(BuildEvent::Started {
            asset_count: assets.len(),
            out_dir: options.out_dir.clone(),
        });

        let mut result = BuildResult::default();
        for asset in assets {
            let outcome = self.build_one(asset, options);
            events.on_event(event_for(&outcome));
            result.outcomes.push(outcome);
        }

        events.on_event(BuildEvent::Completed {
            written_count: result.written().count(),
            missing_count: result.missing().count(),
            failed_count: result.failed_count(),
            out_dir: options.out_dir.clone(),
        });

        Ok(result)
    }

    fn build_one(&self, asset: &SourceAsset, options: &BuildOptions) -> BuildOutcome {
        let source = asset.path().to_path_buf();
        if !self.fs.exists(asset.path()) {
            log::debug!("skipping {}: input file not found", source.display());
            return BuildOutcome::Missing { source };
        }

        let written = render_artifact(&self.fs, asset, &options.out_dir, &options.style)
            .and_then(|artifact| {
                self.fs
                    .write_atomic(artifact.destination(), artifact.content())?;
                Ok(artifact)
            });

        match written {
            Ok(artifact) => {
                log::info!(
                    "{} -> {} ({} bytes)",
                    source.display(),
                    artifact.destination().display(),
                    artifact.len()
                );
                BuildOutcome::Written { source, artifact }
            }
            Err(error) => {
                log::debug!("failed to generate {}: {}", source.display(), error);
                BuildOutcome::Failed { source, error }
            }
        }
    }
}

fn event_for(outcome: &BuildOutcome) -> BuildEvent {
    match outcome {
        BuildOutcome::Written { source, artifact } => BuildEvent::Written {
            identifier: artifact.identifier().to_string(),
            source: source.clone(),
            destination: artifact.destination().to_path_buf(),
            bytes: artifact.len(),
            hash: artifact.hash().to_string(),
        },
        BuildOutcome::Missing { source } => BuildEvent::Missing {
            source: source.clone(),
        },
        BuildOutcome::Failed { source, error } => BuildEvent::Failed {
            source: source.clone(),
            error: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{NoopEventSink, RecordingEventSink};
    use crate::domain::value_objects::Identifier;
    use crate::infrastructure::fs::MockFileSystem;

    fn options() -> BuildOptions {
        BuildOptions {
            out_dir: PathBuf::from("include"),
            ..BuildOptions::default()
        }
    }

    #[test]
    fn builds_every_asset() {
        let fs = MockFileSystem::new()
            .with_file("data/index.html", "<html></html>\n")
            .with_file("data/charts.html", "<canvas></canvas>\n");
        let assets = vec![
            SourceAsset::derived("data/index.html"),
            SourceAsset::derived("data/charts.html"),
        ];
        let sink = RecordingEventSink::new();

        let result = BuildUseCase::new(fs.clone())
            .execute(&assets, &options(), &sink)
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.written().count(), 2);
        let header = fs.get(Path::new("include/html_index.h")).unwrap();
        assert!(header.contains("const char HTML_INDEX[] PROGMEM = R\"====(\n<html></html>\n\n)====\";"));
        assert!(fs.get(Path::new("include/html_charts.h")).is_some());
    }

    #[test]
    fn missing_file_is_skipped_and_batch_continues() {
        let fs = MockFileSystem::new()
            .with_file("a.html", "a")
            .with_file("c.html", "c");
        let assets = vec![
            SourceAsset::derived("a.html"),
            SourceAsset::derived("b.html"),
            SourceAsset::derived("c.html"),
        ];
        let sink = RecordingEventSink::new();

        let result = BuildUseCase::new(fs.clone())
            .execute(&assets, &options(), &sink)
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.written().count(), 2);
        assert_eq!(result.missing().collect::<Vec<_>>(), vec![Path::new("b.html")]);
        assert!(fs.get(Path::new("include/html_c.h")).is_some());
        assert!(fs.get(Path::new("include/html_b.h")).is_none());

        let events = sink.events();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[2],
            BuildEvent::Missing {
                source: PathBuf::from("b.html")
            }
        );
        assert!(matches!(
            events[4],
            BuildEvent::Completed {
                written_count: 2,
                missing_count: 1,
                failed_count: 0,
                ..
            }
        ));
    }

    #[test]
    fn abort_policy_writes_nothing() {
        let fs = MockFileSystem::new().with_file("a.html", "a");
        let assets = vec![SourceAsset::derived("a.html"), SourceAsset::derived("b.html")];
        let opts = BuildOptions {
            on_missing: MissingPolicy::Abort,
            ..options()
        };

        let err = BuildUseCase::new(fs.clone())
            .execute(&assets, &opts, &NoopEventSink)
            .unwrap_err();

        assert!(matches!(err, EmbedError::MissingInputs { ref paths } if paths.len() == 1));
        assert!(fs.get(Path::new("include/html_a.h")).is_none());
    }

    #[test]
    fn delimiter_collision_fails_only_that_asset() {
        let fs = MockFileSystem::new()
            .with_file("bad.html", "<script>x = ')====\"';</script>")
            .with_file("good.html", "ok");
        let assets = vec![SourceAsset::derived("bad.html"), SourceAsset::derived("good.html")];

        let result = BuildUseCase::new(fs.clone())
            .execute(&assets, &options(), &NoopEventSink)
            .unwrap();

        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.written().count(), 1);
        match &result.outcomes[0] {
            BuildOutcome::Failed { error, .. } => {
                assert!(error.to_string().starts_with("bad.html contains"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_destinations_rejected() {
        let fs = MockFileSystem::new();
        let assets = vec![
            SourceAsset::derived("a/index.html"),
            SourceAsset::new("b/main.html", Identifier::new("html_index").unwrap()),
        ];

        let err = BuildUseCase::new(fs)
            .execute(&assets, &options(), &NoopEventSink)
            .unwrap_err();

        assert!(matches!(err, EmbedError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn empty_batch_is_error() {
        let err = BuildUseCase::new(MockFileSystem::new())
            .execute(&[], &options(), &NoopEventSink)
            .unwrap_err();
        assert!(matches!(err, EmbedError::NoAssets));
    }

    #[test]
    fn invalid_delimiter_is_batch_error() {
        let fs = MockFileSystem::new().with_file("a.html", "a");
        let opts = BuildOptions {
            style: RawBlockStyle {
                delimiter: "has space".to_string(),
                ..RawBlockStyle::default()
            },
            ..options()
        };
        let err = BuildUseCase::new(fs)
            .execute(&[SourceAsset::derived("a.html")], &opts, &NoopEventSink)
            .unwrap_err();
        assert!(matches!(err, EmbedError::InvalidDelimiter { .. }));
    }
}
