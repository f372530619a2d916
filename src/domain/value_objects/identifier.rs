//! Identifier value object
//!
//! The C symbol name an asset is embedded under. It also determines the
//! include guard and the header file name.

use std::fmt;

use crate::error::{EmbedError, EmbedResult};

/// A validated C identifier such as `HTML_INDEX`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Prefix used when deriving an identifier from a file name
    pub const DERIVED_PREFIX: &'static str = "HTML_";

    /// Validate and wrap an explicit identifier
    pub fn new(name: impl Into<String>) -> EmbedResult<Self> {
        let name = name.into();
        if is_c_identifier(&name) {
            Ok(Self(name))
        } else {
            Err(EmbedError::InvalidIdentifier { name })
        }
    }

    /// Derive an identifier from a file name: `index.html` -> `HTML_INDEX`
    ///
    /// The extension is dropped, the stem is uppercased and every byte that
    /// is not an ASCII letter or digit becomes `_`.
    pub fn from_file_name(file_name: &str) -> Self {
        let stem = match file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file_name,
        };

        let mut name = String::with_capacity(Self::DERIVED_PREFIX.len() + stem.len());
        name.push_str(Self::DERIVED_PREFIX);
        for c in stem.chars() {
            if c.is_ascii_alphanumeric() {
                name.push(c.to_ascii_uppercase());
            } else {
                name.push('_');
            }
        }
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Include guard token (`HTML_INDEX_H`)
    pub fn guard(&self) -> String {
        format!("{}_H", self.0)
    }

    /// Header file name (`html_index.h`)
    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.0.to_lowercase())
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Identifier {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
