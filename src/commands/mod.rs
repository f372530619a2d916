//! Command handlers for the htmlconst binary

mod build;
mod check;
mod lines;

pub use build::cmd_build;
pub use check::cmd_check;
pub use lines::cmd_lines;

use std::path::Path;

use anyhow::{Context, Result};

use htmlconst::application::BuildOptions;
use htmlconst::config::{load_or_default, LoadedConfig};
use htmlconst::domain::entities::SourceAsset;
use htmlconst::infrastructure::scan_html_assets;
use htmlconst::presentation::{render_config_warnings, AssetArgs};

/// Assets and options for `build` and `check`, after merging CLI and config
pub(crate) struct Plan {
    pub assets: Vec<SourceAsset>,
    pub options: BuildOptions,
}

/// Load config and report its warnings on stderr
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    // An empty cwd keeps printed paths relative to where the user ran us.
    let loaded = load_or_default(explicit, Path::new(""))?;
    if let Some(source) = &loaded.source {
        if !loaded.warnings.is_empty() {
            eprint!("{}", render_config_warnings(source, &loaded.warnings));
        }
    }
    Ok(loaded)
}

/// Merge CLI arguments over config: CLI assets and `--scan` replace the
/// config's `[[assets]]` table, flags replace config values.
pub(crate) fn plan(args: &AssetArgs) -> Result<Plan> {
    let loaded = load_config(args.config.as_deref())?;
    let config = &loaded.config;

    let mut assets: Vec<SourceAsset> = args
        .assets
        .iter()
        .map(|arg| SourceAsset::parse_arg(arg))
        .collect();

    if let Some(dir) = &args.scan {
        let scanned = scan_html_assets(dir)
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        log::debug!("scan of {} found {} asset(s)", dir.display(), scanned.len());
        assets.extend(scanned);
    }

    if assets.is_empty() {
        assets = config.source_assets(&loaded.base_dir)?;
    }

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());

    let mut style = config.raw_block.style();
    if let Some(delimiter) = &args.delimiter {
        style.delimiter = delimiter.clone();
    }

    Ok(Plan {
        assets,
        options: BuildOptions {
            out_dir,
            style,
            on_missing: config.output.on_missing,
        },
    })
}
