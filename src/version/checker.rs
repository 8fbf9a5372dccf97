//! Version consistency check between a declared and an actual version

use std::fmt;

use crate::version::error::{CheckError, Side};
use crate::version::semver::{parse_version, versions_equal};

/// A version string exactly as a source produced it (surrounding whitespace trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for VersionString {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Outcome of comparing the declared version with the actual one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    /// Both versions are equal under semver precedence
    Match,
    /// The versions differ
    Mismatch,
}

/// Compare a declared version against the version actually reported.
///
/// Both values must be valid semantic versions; build metadata is ignored,
/// so `1.0.0` matches `1.0.0+sha.abc123` while `1.0.0-rc1` does not.
pub fn check(
    declared: &VersionString,
    actual: &VersionString,
) -> Result<ComparisonResult, CheckError> {
    let declared_version = parse_version(declared.as_str()).ok_or_else(|| {
        CheckError::InvalidVersionFormat {
            which: Side::Declared,
            raw: declared.to_string(),
        }
    })?;

    let actual_version =
        parse_version(actual.as_str()).ok_or_else(|| CheckError::InvalidVersionFormat {
            which: Side::Actual,
            raw: actual.to_string(),
        })?;

    if versions_equal(&declared_version, &actual_version) {
        Ok(ComparisonResult::Match)
    } else {
        Ok(ComparisonResult::Mismatch)
    }
}
