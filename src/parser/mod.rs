//! Parser layer
//! - traits.rs: ManifestParser trait definition
//! - types.rs: Common types (ManifestVersion, ManifestKind)
//! - package_json.rs: package.json (and other JSON manifest) parser
//! - cargo_toml.rs: Cargo.toml parser
//! - pyproject_toml.rs: pyproject.toml parser
//! - toml.rs: tree-sitter helpers shared by the TOML parsers

pub mod cargo_toml;
pub mod package_json;
pub mod pyproject_toml;
mod toml;
pub mod traits;
pub mod types;

pub use cargo_toml::CargoTomlParser;
pub use package_json::PackageJsonParser;
pub use pyproject_toml::PyprojectTomlParser;
pub use traits::{ManifestParser, ParseError};
pub use types::{ManifestKind, ManifestVersion, detect_manifest_kind};

/// Create the parser for a manifest kind
///
/// `field` only applies to JSON manifests; TOML manifests have a fixed
/// location for the package version.
pub fn parser_for(kind: ManifestKind, field: &str) -> Box<dyn ManifestParser> {
    match kind {
        ManifestKind::Json => Box::new(PackageJsonParser::new(field)),
        ManifestKind::CargoToml => Box::new(CargoTomlParser::new()),
        ManifestKind::PyprojectToml => Box::new(PyprojectTomlParser::new()),
    }
}
