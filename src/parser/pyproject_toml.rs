//! pyproject.toml parser
//!
//! Reads `[project].version` (PEP 621), falling back to
//! `[tool.poetry].version` for Poetry projects.

use crate::parser::toml::{find_tables, pairs, parse_toml};
use crate::parser::traits::{ManifestParser, ParseError};
use crate::parser::types::ManifestVersion;

/// Parser for pyproject.toml files
pub struct PyprojectTomlParser;

impl PyprojectTomlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PyprojectTomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PyprojectTomlParser {
    fn parse(&self, content: &str) -> Result<Option<ManifestVersion>, ParseError> {
        let tree = parse_toml(content)?;
        let root = tree.root_node();

        let version = ["project", "tool.poetry"].iter().find_map(|table| {
            find_tables(root, content, table)
                .into_iter()
                .flat_map(|table_node| pairs(table_node, content))
                .find(|(key, value)| key == "version" && value.kind() == "string")
                .map(|(_, value)| ManifestVersion::from_string_node(value, content))
        });

        Ok(version)
    }
}
