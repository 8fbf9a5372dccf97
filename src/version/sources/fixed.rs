use crate::version::checker::VersionString;
use crate::version::error::SourceError;
use crate::version::source::VersionSource;

/// A version value injected directly, e.g. one already known to the caller
pub struct FixedSource {
    label: String,
    version: VersionString,
}

impl FixedSource {
    pub fn new(label: impl Into<String>, version: impl Into<VersionString>) -> Self {
        Self {
            label: label.into(),
            version: version.into(),
        }
    }
}

impl VersionSource for FixedSource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn provide(&self) -> Result<VersionString, SourceError> {
        Ok(self.version.clone())
    }
}
