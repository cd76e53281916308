//! Config drift detection between builds.
//!
//! [`keys`] holds the per-platform critical-key whitelists; [`detector`]
//! compares the current build configuration against the ledger's snapshot.

pub mod detector;
pub mod keys;

pub use detector::{ConfigChange, DriftDetector, BUILD_PROPERTIES_PLUGIN, UNSET};
pub use keys::{CriticalKeys, DEFAULT_ANDROID_KEYS, DEFAULT_IOS_KEYS};
