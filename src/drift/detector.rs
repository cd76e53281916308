//! Build-configuration drift detection.
//!
//! The detector compares the critical subset of the project's current build
//! configuration (the `expo-build-properties` plugin entry in the app
//! manifest) against the snapshot the ledger recorded after the last
//! successful build. Any key-level difference means the build cache can no
//! longer be trusted.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::config::ManifestPaths;
use crate::error::Result;
use crate::ledger::{ConfigSnapshot, DeploymentLedger};
use crate::manifest;
use crate::platform::Platform;

/// Plugin whose per-platform sections hold the build-relevant configuration.
pub const BUILD_PROPERTIES_PLUGIN: &str = "expo-build-properties";

/// Rendering of an absent value in change reports.
pub const UNSET: &str = "unset";

/// A single key-level difference between snapshot and current configuration.
///
/// Computed transiently, never persisted. `from`/`to` are display renderings;
/// an absent side renders as [`UNSET`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    pub key: String,
    pub from: String,
    pub to: String,
}

/// Detects drift between the ledger's config snapshot and the app manifest.
#[derive(Debug, Clone)]
pub struct DriftDetector {
    app_manifest: PathBuf,
}

impl DriftDetector {
    /// Create a detector using the default app manifest under `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self::with_paths(project_root, &ManifestPaths::default())
    }

    /// Create a detector with a configured app manifest path.
    pub fn with_paths(project_root: &Path, paths: &ManifestPaths) -> Self {
        Self {
            app_manifest: project_root.join(&paths.app_manifest),
        }
    }

    /// The critical subset of the platform's current build configuration.
    ///
    /// Keys absent from the source configuration are omitted (not defaulted
    /// to null). A missing manifest, plugin entry, or platform section reads
    /// as an empty map.
    pub fn read_current_config(&self, platform: Platform, keys: &[String]) -> ConfigSnapshot {
        let Some(doc) = manifest::read_json(&self.app_manifest) else {
            return ConfigSnapshot::new();
        };
        let section = manifest::plugin_config(&doc, BUILD_PROPERTIES_PLUGIN)
            .and_then(|props| props.get(platform.as_str()));
        let Some(section) = section else {
            return ConfigSnapshot::new();
        };

        keys.iter()
            .filter_map(|key| {
                section
                    .get(key)
                    .map(|value| (key.clone(), value.clone()))
            })
            .collect()
    }

    /// Key-level differences between `stored` and the current configuration.
    ///
    /// Iterates in `keys` order (not map insertion order), which fixes the
    /// display order of downstream warnings. A change is any strict value
    /// inequality, including one side being absent.
    pub fn detect_changes(
        &self,
        platform: Platform,
        stored: &ConfigSnapshot,
        keys: &[String],
    ) -> Vec<ConfigChange> {
        let current = self.read_current_config(platform, keys);

        keys.iter()
            .filter_map(|key| {
                let from = stored.get(key);
                let to = current.get(key);
                if from == to {
                    None
                } else {
                    Some(ConfigChange {
                        key: key.clone(),
                        from: render(from),
                        to: render(to),
                    })
                }
            })
            .collect()
    }

    /// Whether any critical key differs from the stored snapshot.
    pub fn has_changed(&self, platform: Platform, stored: &ConfigSnapshot, keys: &[String]) -> bool {
        !self.detect_changes(platform, stored, keys).is_empty()
    }

    /// Record the current configuration as the new baseline.
    ///
    /// The only write path into the ledger's snapshot; intended to run
    /// strictly after a successful build.
    pub fn commit_snapshot(
        &self,
        platform: Platform,
        keys: &[String],
        ledger: &mut DeploymentLedger,
    ) -> Result<()> {
        let snapshot = self.read_current_config(platform, keys);
        tracing::debug!(%platform, keys = snapshot.len(), "Committing config snapshot");
        ledger.set_config_snapshot(platform, snapshot)
    }
}

fn render(value: Option<&Value>) -> String {
    match value {
        None => UNSET.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
