//! Error types for liftoff operations.
//!
//! This module defines [`LiftoffError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `InvalidVersionFormat` is the only validation failure that must reach the
//!   caller; everything that looks like absence (missing files, bad JSON,
//!   missing fields) degrades to a safe default at the I/O boundary instead of
//!   raising.
//! - Use `anyhow::Error` (via `LiftoffError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for liftoff operations.
#[derive(Debug, Error)]
pub enum LiftoffError {
    /// Version string is not exactly three dot-separated non-negative integers.
    #[error("Invalid version format: '{version}' (expected MAJOR.MINOR.PATCH)")]
    InvalidVersionFormat { version: String },

    /// Failed to serialize a document for persistence.
    #[error("Failed to serialize {path}: {message}")]
    SerializeError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for liftoff operations.
pub type Result<T> = std::result::Result<T, LiftoffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_version_format_displays_version() {
        let err = LiftoffError::InvalidVersionFormat {
            version: "1.0".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1.0"));
        assert!(msg.contains("MAJOR.MINOR.PATCH"));
    }

    #[test]
    fn serialize_error_displays_path_and_message() {
        let err = LiftoffError::SerializeError {
            path: PathBuf::from("/project/.liftoff/deployments.json"),
            message: "key must be a string".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("deployments.json"));
        assert!(msg.contains("key must be a string"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LiftoffError = io_err.into();
        assert!(matches!(err, LiftoffError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LiftoffError::InvalidVersionFormat {
                version: "abc".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
