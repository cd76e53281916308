//! Critical-key whitelists.
//!
//! Only whitelisted build-configuration fields participate in drift
//! detection; comparing a whitelist instead of the full configuration avoids
//! false positives from unrelated settings and keeps the check proportional
//! to the whitelist size.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Default critical keys for iOS builds.
pub const DEFAULT_IOS_KEYS: [&str; 3] = ["deploymentTarget", "useFrameworks", "newArchEnabled"];

/// Default critical keys for Android builds.
pub const DEFAULT_ANDROID_KEYS: [&str; 5] = [
    "compileSdkVersion",
    "targetSdkVersion",
    "minSdkVersion",
    "kotlinVersion",
    "newArchEnabled",
];

/// Per-platform whitelist of build-cache-invalidating configuration keys.
///
/// Key order is preserved as given; drift reports iterate in this order so
/// output stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalKeys {
    pub ios: Vec<String>,
    pub android: Vec<String>,
}

impl CriticalKeys {
    pub fn for_platform(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }
}

impl Default for CriticalKeys {
    fn default() -> Self {
        Self {
            ios: DEFAULT_IOS_KEYS.iter().map(|k| k.to_string()).collect(),
            android: DEFAULT_ANDROID_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}
