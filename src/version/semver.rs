//! Semantic version values and bump arithmetic.
//!
//! Parsing is deliberately asymmetric: [`SemVer::parse_lenient`] zero-pads
//! short or malformed strings so legacy ledger data always compares, while
//! [`SemVer::parse_strict`] rejects anything that is not exactly
//! `MAJOR.MINOR.PATCH` — mutation must be strict, comparison permissive.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{LiftoffError, Result};

/// A fully-specified semantic version triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Kind of version bump to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
    /// Keep the current version; no manifest write is performed.
    None,
}

fn strict_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("valid regex"))
}

impl SemVer {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, never failing.
    ///
    /// Missing or non-numeric components default to 0; components beyond the
    /// third are ignored.
    pub fn parse_lenient(version: &str) -> Self {
        let mut parts = version
            .split('.')
            .map(|part| part.trim().parse::<u64>().unwrap_or(0));
        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }

    /// Parse a version string, requiring exactly three dot-separated
    /// non-negative integers.
    ///
    /// # Errors
    ///
    /// Returns [`LiftoffError::InvalidVersionFormat`] for missing or extra
    /// components, non-numeric components, leading/trailing garbage, or
    /// components that overflow `u64`.
    pub fn parse_strict(version: &str) -> Result<Self> {
        let invalid = || LiftoffError::InvalidVersionFormat {
            version: version.to_string(),
        };

        let caps = strict_pattern().captures(version).ok_or_else(invalid)?;
        let component = |i: usize| caps[i].parse::<u64>().map_err(|_| invalid());

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// The version after applying a bump.
    pub fn bumped(self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Patch => Self::new(self.major, self.minor, self.patch + 1),
            BumpKind::Minor => Self::new(self.major, self.minor + 1, 0),
            BumpKind::Major => Self::new(self.major + 1, 0, 0),
            BumpKind::None => self,
        }
    }

    /// Compare two version strings component-wise, parsing leniently.
    pub fn compare(a: &str, b: &str) -> Ordering {
        Self::parse_lenient(a).cmp(&Self::parse_lenient(b))
    }

    /// Whether version string `a` is strictly newer than `b`.
    pub fn is_newer(a: &str, b: &str) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
