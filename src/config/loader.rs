//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::MissingPolicy;
use crate::error::{EmbedError, EmbedResult};

use super::types::Config;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "htmlconst.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A loaded configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
    /// Directory relative asset and output paths are resolved against
    pub base_dir: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EmbedResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmbedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config, or `htmlconst.toml` in `cwd`, or defaults
///
/// A missing explicit config is an error; a missing default one is not.
/// The file's `[output] dir` is resolved against the file's directory, then
/// environment overrides are applied and resolved against `cwd`.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> EmbedResult<LoadedConfig> {
    load_or_default_from(explicit, cwd, |key| std::env::var(key).ok())
}

pub(crate) fn load_or_default_from(
    explicit: Option<&Path>,
    cwd: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> EmbedResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(EmbedError::InvalidConfig {
                    file: path.to_path_buf(),
                    message: "file not found".to_string(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let default = cwd.join(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    };

    let Some(path) = candidate else {
        log::debug!("no config file, using defaults");
        let mut config = Config::default();
        config.output.dir = resolve_path(cwd, &config.output.dir);
        return Ok(LoadedConfig {
            config: with_env_overrides_from(config, cwd, get_env),
            source: None,
            base_dir: cwd.to_path_buf(),
            warnings: Vec::new(),
        });
    };

    log::debug!("loading config from {}", path.display());
    let (mut config, warnings) = load_with_warnings(&path)?;
    let base_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => cwd.to_path_buf(),
    };
    config.output.dir = resolve_path(&base_dir, &config.output.dir);

    Ok(LoadedConfig {
        config: with_env_overrides_from(config, cwd, get_env),
        source: Some(path),
        base_dir,
        warnings,
    })
}

/// Apply environment variable overrides (HTMLCONST_* prefix)
///
/// A relative `HTMLCONST_OUT_DIR` is taken relative to `cwd`, not to the
/// config file.
pub(crate) fn with_env_overrides_from(
    mut config: Config,
    cwd: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // HTMLCONST_OUT_DIR
    if let Some(dir) = get_env("HTMLCONST_OUT_DIR") {
        if !dir.trim().is_empty() {
            config.output.dir = resolve_path(cwd, Path::new(&dir));
        }
    }

    // HTMLCONST_ON_MISSING
    if let Some(policy) = get_env("HTMLCONST_ON_MISSING") {
        match MissingPolicy::parse(&policy) {
            Some(p) => config.output.on_missing = p,
            None => log::warn!("ignoring HTMLCONST_ON_MISSING={policy:?}: expected skip or abort"),
        }
    }

    config
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "dir",
        "on_missing",
        "raw_block",
        "delimiter",
        "platform_header",
        "storage_annotation",
        "regenerate_command",
        "line_literal",
        "variable",
        "declare_type",
        "assets",
        "file",
        "identifier",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
