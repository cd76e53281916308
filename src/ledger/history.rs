//! Persisted deployment history data model.
//!
//! These types map one-to-one onto the ledger's JSON document:
//!
//! ```json
//! {
//!   "versions": {
//!     "1.2.0": {
//!       "ios": { "preview": "2026-08-30T12:00:00Z", "production": null },
//!       "android": { "preview": null, "production": null }
//!     }
//!   },
//!   "lastConfig": { "ios": {}, "android": {} }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::platform::{PerPlatform, Platform, DEFAULT_PROFILES};

/// Per-profile deployment timestamps; `None` means never deployed.
pub type ProfileMap = BTreeMap<String, Option<DateTime<Utc>>>;

/// Last-known build-relevant configuration values for one platform.
pub type ConfigSnapshot = BTreeMap<String, serde_json::Value>;

/// Deployment timestamps for one app version, per platform and profile.
pub type DeploymentRecord = PerPlatform<ProfileMap>;

/// The persisted root document, owned exclusively by the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentHistory {
    /// Deployment records keyed by version string.
    pub versions: BTreeMap<String, DeploymentRecord>,

    /// Config snapshot taken after the last successful build, per platform.
    pub last_config: PerPlatform<ConfigSnapshot>,
}

impl DeploymentRecord {
    /// A record with every default profile present and never deployed.
    ///
    /// Untracked versions are reported in this shape so callers always see
    /// both platforms and the default profiles, rather than an absent record.
    pub fn placeholder() -> DeploymentRecord {
        let profiles: ProfileMap = DEFAULT_PROFILES
            .iter()
            .map(|profile| (profile.to_string(), None))
            .collect();
        PerPlatform {
            ios: profiles.clone(),
            android: profiles,
        }
    }

    /// The recorded timestamp for a (platform, profile), if any.
    pub fn timestamp(&self, platform: Platform, profile: &str) -> Option<DateTime<Utc>> {
        self.get(platform).get(profile).copied().flatten()
    }
}
