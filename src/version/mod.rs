//! Semantic-version arithmetic and dual-manifest version persistence.
//!
//! [`SemVer`] is the pure value type (parsing, comparison, bump arithmetic);
//! [`VersionEngine`] binds it to a project's manifests.

pub mod engine;
pub mod semver;

pub use engine::{BumpOutcome, VersionEngine};
pub use semver::{BumpKind, SemVer};
