//! Directory scan for HTML assets
//!
//! Walks a directory with gitignore semantics and turns every `.html` /
//! `.htm` file into a `SourceAsset` with a derived identifier.

use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::entities::SourceAsset;
use crate::error::EmbedResult;

/// Per-directory ignore file honored by the scan, in addition to `.gitignore`
pub const IGNORE_FILE_NAME: &str = ".htmlconstignore";

const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Collect HTML files under `dir`, sorted by path
///
/// The walk visits siblings in name order, which yields the same order as
/// comparing whole paths component by component.
pub fn scan_html_assets(dir: &Path) -> EmbedResult<Vec<SourceAsset>> {
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("scan directory not found: {}", dir.display()),
        )
        .into());
    }

    let walker = WalkBuilder::new(dir)
        .add_custom_ignore_filename(IGNORE_FILE_NAME)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut assets = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let is_html = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| HTML_EXTENSIONS.iter().any(|h| e.eq_ignore_ascii_case(h)));
        if is_html {
            log::debug!("scan found {}", path.display());
            assets.push(SourceAsset::derived(path));
        }
    }

    Ok(assets)
}
