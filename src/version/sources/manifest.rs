//! Manifest source: the version declared in a package manifest

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::parser::{ManifestKind, detect_manifest_kind, parser_for};
use crate::version::checker::VersionString;
use crate::version::error::SourceError;
use crate::version::source::VersionSource;

pub struct ManifestSource {
    path: PathBuf,
    field: String,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            field: field.into(),
        }
    }

    /// Name of the value being read; TOML manifests always use `version`
    fn field_name(&self) -> &str {
        match detect_manifest_kind(&self.path) {
            Some(ManifestKind::CargoToml | ManifestKind::PyprojectToml) => "version",
            _ => &self.field,
        }
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> SourceError {
        SourceError::unavailable(self.label(), reason)
    }
}

impl VersionSource for ManifestSource {
    fn label(&self) -> String {
        format!("package {}", self.field_name())
    }

    fn provide(&self) -> Result<VersionString, SourceError> {
        let kind = detect_manifest_kind(&self.path).ok_or_else(|| {
            self.unavailable(format!(
                "unsupported manifest type: {}",
                self.path.display()
            ))
        })?;
        debug!("Reading {} manifest {:?}", kind.as_str(), self.path);

        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.unavailable(format!("{}: {}", self.path.display(), e)))?;

        let declared = parser_for(kind, &self.field)
            .parse(&content)
            .map_err(|e| self.unavailable(format!("{}: {}", self.path.display(), e)))?
            .ok_or_else(|| {
                self.unavailable(format!(
                    "no {:?} string in {}",
                    self.field_name(),
                    self.path.display()
                ))
            })?;

        info!(
            "Declared version {} at {}:{}:{}",
            declared.version,
            self.path.display(),
            declared.line + 1,
            declared.column + 1
        );
        Ok(VersionString::new(declared.version))
    }
}
