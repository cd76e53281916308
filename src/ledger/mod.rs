//! Deployment ledger: persisted record of what shipped where, and when.
//!
//! [`history`] defines the serde data model for the JSON document;
//! [`store`] wraps it in [`DeploymentLedger`], the owned-state object with a
//! single mutation entry point per operation.

pub mod history;
pub mod store;

pub use history::{ConfigSnapshot, DeploymentHistory, DeploymentRecord, ProfileMap};
pub use store::{DeploymentLedger, SyncWarning, LEDGER_DIR, LEDGER_FILE};
