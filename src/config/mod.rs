//! Project configuration for liftoff.
//!
//! An optional `liftoff.yml` at the project root can override the manifest
//! paths and the critical-key whitelists. A missing or unparsable file reads
//! as the defaults; partially-configured projects must stay usable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::drift::CriticalKeys;
use crate::manifest::{APP_MANIFEST, PACKAGE_MANIFEST};

/// Config file name under the project root.
pub const CONFIG_FILE: &str = "liftoff.yml";

/// Root configuration structure for `liftoff.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftoffConfig {
    /// Manifest locations, relative to the project root.
    pub paths: ManifestPaths,

    /// Critical-key whitelists for drift detection.
    pub critical_keys: CriticalKeys,
}

/// Locations of the two version manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestPaths {
    /// Primary manifest, authoritative for the version.
    pub app_manifest: PathBuf,

    /// Secondary manifest, kept in sync for ecosystem compatibility.
    pub package_manifest: PathBuf,
}

impl Default for ManifestPaths {
    fn default() -> Self {
        Self {
            app_manifest: PathBuf::from(APP_MANIFEST),
            package_manifest: PathBuf::from(PACKAGE_MANIFEST),
        }
    }
}

impl LiftoffConfig {
    /// Load configuration from `liftoff.yml` under `project_root`.
    ///
    /// A missing file yields the defaults; an unparsable file is logged and
    /// also yields the defaults.
    pub fn load(project_root: &Path) -> Self {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Config unreadable; using defaults");
                return Self::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Config unparsable; using defaults");
                Self::default()
            }
        }
    }
}
