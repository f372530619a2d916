//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod identifier;
mod missing_policy;

pub use hash::ContentHash;
pub use identifier::Identifier;
pub use missing_policy::MissingPolicy;
