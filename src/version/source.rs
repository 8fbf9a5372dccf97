//! Source trait for obtaining a version value from a collaborator

#[cfg(test)]
use mockall::automock;

use crate::version::checker::VersionString;
use crate::version::error::SourceError;

/// Trait for anything that can produce a version string on demand
///
/// - Manifest: the version declared in a package manifest
/// - Binding: the version a loaded library reports about itself
#[cfg_attr(test, automock)]
pub trait VersionSource {
    /// Human-readable label used when reporting this value
    fn label(&self) -> String;

    /// Obtain the version value
    ///
    /// # Returns
    /// * `Ok(VersionString)` - The raw version, not yet validated
    /// * `Err(SourceError)` - If the collaborator could not produce a value
    fn provide(&self) -> Result<VersionString, SourceError>;
}
