//! The deployment ledger: owned state over the persisted history document.
//!
//! [`DeploymentLedger`] loads the whole document into memory on construction
//! and rewrites it in full after every mutation. There is no locking and no
//! write-ahead protocol: the crate assumes a single operator on a single
//! machine, and a second concurrent writer would silently win at the file
//! level (last writer wins). Writes are not atomic with respect to process
//! crashes either; a document corrupted mid-write is tolerated only by the
//! empty-history fallback on the next load.

use chrono::{DateTime, Utc};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::history::{ConfigSnapshot, DeploymentHistory, DeploymentRecord};
use crate::error::{LiftoffError, Result};
use crate::platform::Platform;
use crate::version::SemVer;

/// Directory under the project root holding liftoff state.
pub const LEDGER_DIR: &str = ".liftoff";

/// Ledger document file name inside [`LEDGER_DIR`].
pub const LEDGER_FILE: &str = "deployments.json";

/// A cross-platform deployment consistency warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncWarning {
    /// The sibling platform already shipped this (version, profile).
    SiblingDeployed {
        version: String,
        platform: Platform,
        sibling: Platform,
        profile: String,
    },

    /// This exact (version, platform, profile) was already deployed.
    AlreadyDeployed {
        version: String,
        platform: Platform,
        profile: String,
        at: DateTime<Utc>,
    },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncWarning::SiblingDeployed {
                version,
                platform,
                sibling,
                profile,
            } => write!(
                f,
                "{sibling} already has {version} deployed to {profile}; keep {platform} in sync"
            ),
            SyncWarning::AlreadyDeployed {
                version,
                platform,
                profile,
                at,
            } => write!(
                f,
                "{platform} {version} was already deployed to {profile} at {}",
                at.to_rfc3339()
            ),
        }
    }
}

/// Owns the persisted deployment history for one project.
#[derive(Debug, Clone)]
pub struct DeploymentLedger {
    path: PathBuf,
    history: DeploymentHistory,
}

impl DeploymentLedger {
    /// Path of the ledger document for a project root.
    pub fn ledger_path(project_root: &Path) -> PathBuf {
        project_root.join(LEDGER_DIR).join(LEDGER_FILE)
    }

    /// Open the ledger for a project, loading the document if present.
    ///
    /// A missing or unparsable document degrades to an empty history; the
    /// ledger must be usable even with no history on disk.
    pub fn open(project_root: &Path) -> Self {
        let path = Self::ledger_path(project_root);
        let history = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(history) => history,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Ledger document unparsable; starting from empty history"
                    );
                    DeploymentHistory::default()
                }
            },
            Err(_) => DeploymentHistory::default(),
        };

        Self { path, history }
    }

    /// Whether the persisted document exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reset to an empty history and persist it.
    ///
    /// Destructive: overwrites any populated document. Callers are expected
    /// to guard against accidental re-initialization.
    pub fn initialize(&mut self) -> Result<()> {
        self.history = DeploymentHistory::default();
        self.persist()
    }

    /// Deployment record for a version.
    ///
    /// Untracked versions yield an all-null record with the default profiles,
    /// so the result is always a well-formed shape.
    pub fn version_status(&self, version: &str) -> DeploymentRecord {
        self.history
            .versions
            .get(version)
            .cloned()
            .unwrap_or_else(DeploymentRecord::placeholder)
    }

    /// Record a deployment of `version` to (platform, profile) at the current
    /// instant, creating the version's record if absent, and persist.
    pub fn record_deployment(
        &mut self,
        version: &str,
        platform: Platform,
        profile: &str,
    ) -> Result<DateTime<Utc>> {
        let now = Utc::now();
        self.history
            .versions
            .entry(version.to_string())
            .or_insert_with(DeploymentRecord::placeholder)
            .get_mut(platform)
            .insert(profile.to_string(), Some(now));

        self.persist()?;
        tracing::debug!(%version, %platform, profile, "Recorded deployment");
        Ok(now)
    }

    /// The stored config snapshot for a platform (empty if never committed).
    pub fn config_snapshot(&self, platform: Platform) -> &ConfigSnapshot {
        self.history.last_config.get(platform)
    }

    /// Replace a platform's config snapshot and persist.
    pub fn set_config_snapshot(
        &mut self,
        platform: Platform,
        snapshot: ConfigSnapshot,
    ) -> Result<()> {
        *self.history.last_config.get_mut(platform) = snapshot;
        self.persist()
    }

    /// All tracked versions, newest first.
    ///
    /// Ordering is component-wise numeric semver comparison, not string
    /// order, so `10.0.0` sorts before `2.0.0`.
    pub fn list_versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self.history.versions.keys().cloned().collect();
        versions.sort_by(|a, b| SemVer::compare(b, a));
        versions
    }

    /// Platforms lagging behind their sibling for (version, profile).
    ///
    /// A platform is missing only when the other platform has a recorded
    /// timestamp and it does not; a version with zero deployments reports no
    /// missing platforms. This is a sync-drift signal, not a completeness
    /// signal.
    pub fn missing_platforms(&self, version: &str, profile: &str) -> Vec<Platform> {
        let Some(record) = self.history.versions.get(version) else {
            return Vec::new();
        };

        Platform::ALL
            .into_iter()
            .filter(|&platform| {
                record.timestamp(platform.other(), profile).is_some()
                    && record.timestamp(platform, profile).is_none()
            })
            .collect()
    }

    /// Warnings worth surfacing before deploying (version, platform, profile).
    ///
    /// The sibling-deployed and already-deployed checks are evaluated
    /// independently; each produces its own warning, and both fire when both
    /// platforms already shipped this (version, profile).
    pub fn sync_warnings(
        &self,
        version: &str,
        platform: Platform,
        profile: &str,
    ) -> Vec<SyncWarning> {
        let Some(record) = self.history.versions.get(version) else {
            return Vec::new();
        };

        let mut warnings = Vec::new();
        let sibling = platform.other();

        if record.timestamp(sibling, profile).is_some() {
            warnings.push(SyncWarning::SiblingDeployed {
                version: version.to_string(),
                platform,
                sibling,
                profile: profile.to_string(),
            });
        }

        if let Some(at) = record.timestamp(platform, profile) {
            warnings.push(SyncWarning::AlreadyDeployed {
                version: version.to_string(),
                platform,
                profile: profile.to_string(),
                at,
            });
        }

        warnings
    }

    /// Write the whole document back to disk.
    ///
    /// Full rewrite, deliberately not temp-then-rename: a crash mid-write is
    /// recovered by the empty-history fallback in [`DeploymentLedger::open`].
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.history).map_err(|e| {
            LiftoffError::SerializeError {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_without_document_is_empty() {
        let temp = TempDir::new().unwrap();
        let ledger = DeploymentLedger::open(temp.path());

        assert!(!ledger.exists());
        assert!(ledger.list_versions().is_empty());
    }

    #[test]
    fn open_with_corrupt_document_falls_back_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = DeploymentLedger::ledger_path(temp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ truncated").unwrap();

        let ledger = DeploymentLedger::open(temp.path());
        assert!(ledger.exists());
        assert!(ledger.list_versions().is_empty());
    }

    #[test]
    fn initialize_creates_empty_document() {
        let temp = TempDir::new().unwrap();
        let mut ledger = DeploymentLedger::open(temp.path());

        ledger.initialize().unwrap();

        assert!(ledger.exists());
        assert!(ledger.list_versions().is_empty());
        let record = ledger.version_status("1.0.0");
        for platform in Platform::ALL {
            assert!(record.get(platform).values().all(Option::is_none));
        }
    }

    #[test]
    fn initialize_overwrites_populated_state() {
        let temp = TempDir::new().unwrap();
        let mut ledger = DeploymentLedger::open(temp.path());
        ledger
            .record_deployment("1.0.0", Platform::Ios, "preview")
            .unwrap();

        ledger.initialize().unwrap();

        assert!(ledger.list_versions().is_empty());
        let reloaded = DeploymentLedger::open(temp.path());
        assert!(reloaded.list_versions().is_empty());
    }

    #[test]
    fn mutations_survive_reload() {
        let temp = TempDir::new().unwrap();
        let mut ledger = DeploymentLedger::open(temp.path());
        let at = ledger
            .record_deployment("1.2.0", Platform::Android, "production")
            .unwrap();

        let reloaded = DeploymentLedger::open(temp.path());
        let record = reloaded.version_status("1.2.0");
        assert_eq!(record.timestamp(Platform::Android, "production"), Some(at));
    }
}
