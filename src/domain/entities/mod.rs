//! Domain Entities
//!
//! - `SourceAsset` - an HTML file and the identifier it is embedded under
//! - `EmittedArtifact` - a generated header ready to be written

mod artifact;
mod asset;

pub use artifact::EmittedArtifact;
pub use asset::SourceAsset;
