//! Version reads and dual-manifest writes.
//!
//! The [`VersionEngine`] owns the two manifest paths and keeps their version
//! fields identical after every mutation. Reads never fail (absent manifest
//! or field reads as `0.0.0`); writes skip an unreadable manifest rather than
//! erroring, so single-manifest projects stay usable.

use std::path::{Path, PathBuf};

use super::{BumpKind, SemVer};
use crate::config::ManifestPaths;
use crate::error::Result;
use crate::manifest;

/// Result of a bump operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpOutcome {
    pub old: SemVer,
    pub new: SemVer,
}

/// Reads and mutates the project's version across both manifests.
#[derive(Debug, Clone)]
pub struct VersionEngine {
    app_manifest: PathBuf,
    package_manifest: PathBuf,
}

impl VersionEngine {
    /// Create an engine using the default manifest names under `project_root`.
    pub fn new(project_root: &Path) -> Self {
        Self::with_paths(project_root, &ManifestPaths::default())
    }

    /// Create an engine with configured manifest paths (relative to
    /// `project_root` unless absolute).
    pub fn with_paths(project_root: &Path, paths: &ManifestPaths) -> Self {
        Self {
            app_manifest: project_root.join(&paths.app_manifest),
            package_manifest: project_root.join(&paths.package_manifest),
        }
    }

    /// The authoritative current version, from the app manifest.
    ///
    /// Returns `0.0.0` when the manifest or its version field is absent.
    pub fn current_version(&self) -> SemVer {
        manifest::read_json(&self.app_manifest)
            .as_ref()
            .and_then(manifest::app_version)
            .map(SemVer::parse_lenient)
            .unwrap_or_default()
    }

    /// Apply a bump to the current version.
    ///
    /// For any kind other than [`BumpKind::None`] the new version is written
    /// to both manifests. A manifest that cannot be read is skipped with a
    /// warning; the computed version is returned regardless, so callers must
    /// not assume persistence succeeded.
    pub fn bump(&self, kind: BumpKind) -> BumpOutcome {
        let old = self.current_version();
        let new = old.bumped(kind);

        if kind != BumpKind::None {
            self.write_both(new);
        }

        BumpOutcome { old, new }
    }

    /// Validate and set an explicit version.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LiftoffError::InvalidVersionFormat`] unless `version`
    /// is exactly three dot-separated non-negative integers.
    pub fn set_version(&self, version: &str) -> Result<SemVer> {
        let parsed = SemVer::parse_strict(version)?;
        self.write_both(parsed);
        Ok(parsed)
    }

    fn write_both(&self, version: SemVer) {
        self.write_app_manifest(version);
        self.write_package_manifest(version);
    }

    fn write_app_manifest(&self, version: SemVer) {
        let Some(mut doc) = manifest::read_json(&self.app_manifest) else {
            tracing::warn!(
                path = %self.app_manifest.display(),
                "App manifest unreadable; version not written"
            );
            return;
        };
        manifest::set_app_version(&mut doc, &version.to_string());
        if let Err(e) = manifest::write_json_pretty(&self.app_manifest, &doc) {
            tracing::warn!(path = %self.app_manifest.display(), error = %e, "App manifest write failed");
        }
    }

    fn write_package_manifest(&self, version: SemVer) {
        let Some(mut doc) = manifest::read_json(&self.package_manifest) else {
            tracing::warn!(
                path = %self.package_manifest.display(),
                "Package manifest unreadable; version not written"
            );
            return;
        };
        manifest::set_package_version(&mut doc, &version.to_string());
        if let Err(e) = manifest::write_json_pretty(&self.package_manifest, &doc) {
            tracing::warn!(path = %self.package_manifest.display(), error = %e, "Package manifest write failed");
        }
    }
}
