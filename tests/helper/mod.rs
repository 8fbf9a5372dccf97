//! Check test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use version_check::cli::{self, Outcome};
use version_check::version::checker::VersionString;
use version_check::version::error::SourceError;
use version_check::version::source::VersionSource;

/// Write a manifest into a fresh temp dir; keep the dir alive while the path is used
pub fn create_manifest(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// package.json declaring `solcVersion`
pub fn solc_package_json(solc_version: &str) -> String {
    format!(
        r#"{{
  "name": "solc",
  "version": "0.8.21",
  "main": "index.js",
  "solcVersion": "{solc_version}"
}}"#
    )
}

/// Source that always fails, e.g. a binding that is not loaded
pub struct UnavailableSource {
    pub label: String,
    pub reason: String,
}

impl VersionSource for UnavailableSource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn provide(&self) -> Result<VersionString, SourceError> {
        Err(SourceError::unavailable(&self.label, &self.reason))
    }
}

/// Run the check, capturing stdout and stderr
pub fn run_check(
    declared: &dyn VersionSource,
    actual: &dyn VersionSource,
) -> (Outcome, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = cli::run(declared, actual, &mut out, &mut err).unwrap();
    (
        outcome,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}
