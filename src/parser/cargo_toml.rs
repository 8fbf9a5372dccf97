//! Cargo.toml parser
//!
//! Reads `[package].version`. A package that inherits its version with
//! `version.workspace = true` (or `version = { workspace = true }`) is
//! resolved against `[workspace.package].version` in the same file.

use crate::parser::toml::{find_tables, is_true, pairs, parse_toml};
use crate::parser::traits::{ManifestParser, ParseError};
use crate::parser::types::ManifestVersion;
use tracing::debug;

/// Parser for Cargo.toml files
pub struct CargoTomlParser;

impl CargoTomlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CargoTomlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// How a table declares its version
enum VersionDecl {
    Literal(ManifestVersion),
    Workspace,
}

impl ManifestParser for CargoTomlParser {
    fn parse(&self, content: &str) -> Result<Option<ManifestVersion>, ParseError> {
        let tree = parse_toml(content)?;
        let root = tree.root_node();

        let package = self.table_version(root, content, "package");
        match package {
            Some(VersionDecl::Literal(version)) => Ok(Some(version)),
            Some(VersionDecl::Workspace) => {
                debug!("Package version is inherited from [workspace.package]");
                match self.table_version(root, content, "workspace.package") {
                    Some(VersionDecl::Literal(version)) => Ok(Some(version)),
                    _ => Ok(None),
                }
            }
            // A virtual manifest only has [workspace.package]
            None => match self.table_version(root, content, "workspace.package") {
                Some(VersionDecl::Literal(version)) => Ok(Some(version)),
                _ => Ok(None),
            },
        }
    }
}

impl CargoTomlParser {
    /// Find the version declaration in the named table
    fn table_version(
        &self,
        root: tree_sitter::Node,
        content: &str,
        table: &str,
    ) -> Option<VersionDecl> {
        find_tables(root, content, table)
            .into_iter()
            .flat_map(|table_node| pairs(table_node, content))
            .find_map(|(key, value)| match key.as_str() {
                "version" if value.kind() == "string" => Some(VersionDecl::Literal(
                    ManifestVersion::from_string_node(value, content),
                )),
                "version" if value.kind() == "inline_table" => {
                    let inherits = pairs(value, content)
                        .into_iter()
                        .any(|(key, value)| key == "workspace" && is_true(value, content));
                    inherits.then_some(VersionDecl::Workspace)
                }
                "version.workspace" if is_true(value, content) => Some(VersionDecl::Workspace),
                _ => None,
            })
    }
}
