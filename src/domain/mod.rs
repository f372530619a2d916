//! Domain Layer
//!
//! The core of htmlconst - the escaping and emitting transforms, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `SourceAsset`, `EmittedArtifact`
//! - `value_objects/` - `Identifier`, `ContentHash`, `MissingPolicy`
//! - `services/` - escaping, line-literal and raw-block emitters
//! - `ports/` - the `FileSystem` interface used by the drivers

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
