//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::SourceAsset;
use crate::domain::services::RawBlockStyle;
use crate::domain::value_objects::{Identifier, MissingPolicy};
use crate::error::EmbedResult;


/// Where headers go and how missing inputs are handled
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub on_missing: MissingPolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
            on_missing: MissingPolicy::default(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("include")
}

/// Raw-block header boilerplate
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlockConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default = "default_platform_header")]
    pub platform_header: String,

    #[serde(default = "default_storage_annotation")]
    pub storage_annotation: String,

    #[serde(default = "default_regenerate_command")]
    pub regenerate_command: String,
}

impl Default for RawBlockConfig {
    fn default() -> Self {
        let style = RawBlockStyle::default();
        Self {
            delimiter: style.delimiter,
            platform_header: style.platform_header,
            storage_annotation: style.storage_annotation,
            regenerate_command: style.regenerate_command,
        }
    }
}

fn default_delimiter() -> String {
    RawBlockStyle::default().delimiter
}

fn default_platform_header() -> String {
    RawBlockStyle::default().platform_header
}

fn default_storage_annotation() -> String {
    RawBlockStyle::default().storage_annotation
}

fn default_regenerate_command() -> String {
    RawBlockStyle::default().regenerate_command
}

impl RawBlockConfig {
    pub fn style(&self) -> RawBlockStyle {
        RawBlockStyle {
            delimiter: self.delimiter.clone(),
            platform_header: self.platform_header.clone(),
            storage_annotation: self.storage_annotation.clone(),
            regenerate_command: self.regenerate_command.clone(),
        }
    }
}

/// Line-literal statement naming
#[derive(Debug, Clone, Deserialize)]
pub struct LineLiteralConfig {
    #[serde(default = "default_variable")]
    pub variable: String,

    /// Type used to declare the variable on the first line; empty for none
    #[serde(default = "default_declare_type")]
    pub declare_type: String,
}

impl Default for LineLiteralConfig {
    fn default() -> Self {
        Self {
            variable: default_variable(),
            declare_type: default_declare_type(),
        }
    }
}

fn default_variable() -> String {
    "html".to_string()
}

fn default_declare_type() -> String {
    "String".to_string()
}

impl LineLiteralConfig {
    pub fn declare_type(&self) -> Option<&str> {
        if self.declare_type.is_empty() {
            None
        } else {
            Some(&self.declare_type)
        }
    }
}

/// One `[[assets]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetEntry {
    pub file: PathBuf,

    #[serde(default)]
    pub identifier: Option<String>,
}

impl AssetEntry {
    /// Resolve against the config file's directory
    pub fn to_source_asset(&self, base_dir: &Path) -> EmbedResult<SourceAsset> {
        let path = base_dir.join(&self.file);
        match &self.identifier {
            Some(name) => Ok(SourceAsset::new(path, Identifier::new(name.clone())?)),
            None => Ok(SourceAsset::derived(path)),
        }
    }
}

/// Main configuration structure (`htmlconst.toml`)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub raw_block: RawBlockConfig,

    #[serde(default)]
    pub line_literal: LineLiteralConfig,

    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

impl Config {
    /// Configured assets, resolved against `base_dir`
    pub fn source_assets(&self, base_dir: &Path) -> EmbedResult<Vec<SourceAsset>> {
        self.assets
            .iter()
            .map(|entry| entry.to_source_asset(base_dir))
            .collect()
    }
}
