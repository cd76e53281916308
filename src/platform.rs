//! Store platforms and deployment profiles.
//!
//! This module provides the [`Platform`] enum for the two store-submission
//! targets tracked in parallel, and [`PerPlatform`], the fixed two-slot
//! container used wherever state is kept per platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A store-submission target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

/// Default deployment profiles used to shape never-deployed records.
///
/// Any profile name can be recorded against the ledger; these only determine
/// which profiles appear (as `null`) in a placeholder record.
pub const DEFAULT_PROFILES: [&str; 2] = ["preview", "production"];

impl Platform {
    /// Both platforms, in display order.
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// The sibling platform.
    pub fn other(self) -> Self {
        match self {
            Platform::Ios => Platform::Android,
            Platform::Android => Platform::Ios,
        }
    }

    /// Lowercase name as it appears in manifests and the ledger document.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value held once per platform.
///
/// Used for deployment records and config snapshots; keeping the two slots as
/// named fields (rather than a map keyed by platform) means a loaded document
/// always has a well-formed entry for both platforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerPlatform<T> {
    pub ios: T,
    pub android: T,
}

impl<T> PerPlatform<T> {
    pub fn get(&self, platform: Platform) -> &T {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }

    pub fn get_mut(&mut self, platform: Platform) -> &mut T {
        match platform {
            Platform::Ios => &mut self.ios,
            Platform::Android => &mut self.android,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_involutive() {
        assert_eq!(Platform::Ios.other(), Platform::Android);
        assert_eq!(Platform::Android.other(), Platform::Ios);
        for p in Platform::ALL {
            assert_eq!(p.other().other(), p);
        }
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Platform::Ios.to_string(), "ios");
        assert_eq!(Platform::Android.to_string(), "android");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Ios).unwrap(), "\"ios\"");
        let parsed: Platform = serde_json::from_str("\"android\"").unwrap();
        assert_eq!(parsed, Platform::Android);
    }

    #[test]
    fn per_platform_get_and_get_mut() {
        let mut pair = PerPlatform {
            ios: 1u32,
            android: 2u32,
        };
        assert_eq!(*pair.get(Platform::Ios), 1);
        assert_eq!(*pair.get(Platform::Android), 2);

        *pair.get_mut(Platform::Ios) = 10;
        assert_eq!(pair.ios, 10);
    }
}
