//! Liftoff - deployment state and versioning engine for mobile release cycles.
//!
//! Liftoff tracks what version was deployed to which store platform and
//! profile, drives release numbering with semantic-version arithmetic, and
//! detects drift in build-relevant configuration so a driver can decide when
//! the build cache must be invalidated. It performs no builds, talks to no
//! network service, and parses no command-line arguments; those belong to the
//! orchestration layer that calls into this crate.
//!
//! # Modules
//!
//! - [`config`] - Project configuration (`liftoff.yml`) loading
//! - [`drift`] - Config drift detection against the ledger's snapshot
//! - [`error`] - Error types and result aliases
//! - [`ledger`] - Persisted per-version, per-platform deployment history
//! - [`manifest`] - Absence-tolerant JSON manifest reads and writes
//! - [`platform`] - Store platforms, profiles, per-platform containers
//! - [`version`] - Semantic-version arithmetic and dual-manifest writes
//!
//! # Example
//!
//! ```no_run
//! use liftoff::ledger::DeploymentLedger;
//! use liftoff::platform::Platform;
//! use liftoff::version::{BumpKind, VersionEngine};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let engine = VersionEngine::new(root);
//! let outcome = engine.bump(BumpKind::Patch);
//!
//! let mut ledger = DeploymentLedger::open(root);
//! ledger
//!     .record_deployment(&outcome.new.to_string(), Platform::Ios, "preview")
//!     .unwrap();
//! ```
//!
//! # Concurrency
//!
//! Single-process, single-writer by design: every ledger mutation rewrites
//! the whole document, with no locking and no atomic-rename protocol. See
//! [`ledger::DeploymentLedger`] for the exact guarantees.

pub mod config;
pub mod drift;
pub mod error;
pub mod ledger;
pub mod manifest;
pub mod platform;
pub mod version;

pub use error::{LiftoffError, Result};
