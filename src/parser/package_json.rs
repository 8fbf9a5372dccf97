//! package.json parser
//!
//! Works for any JSON manifest (deno.json, jsr.json, ...). The field is a
//! dot-separated path into nested objects: `solcVersion`, `version`,
//! `engines.node`.

use crate::parser::traits::{ManifestParser, ParseError};
use crate::parser::types::ManifestVersion;
use tracing::{debug, warn};

/// Parser for package.json files
pub struct PackageJsonParser {
    field_path: Vec<String>,
}

impl PackageJsonParser {
    pub fn new(field: &str) -> Self {
        Self {
            field_path: field.split('.').map(str::to_string).collect(),
        }
    }
}

impl ManifestParser for PackageJsonParser {
    fn parse(&self, content: &str) -> Result<Option<ManifestVersion>, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_json::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set JSON language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse JSON content");
            ParseError::ParseFailed("Failed to parse JSON".to_string())
        })?;

        let root = tree.root_node();

        // tree-sitter recovers from syntax errors; a broken manifest is still broken
        if root.has_error() {
            warn!("JSON content has syntax errors");
            return Err(ParseError::ParseFailed("Invalid JSON syntax".to_string()));
        }

        // Find the root object
        let mut cursor = root.walk();
        let Some(document) = root
            .children(&mut cursor)
            .find(|child| child.kind() == "object")
        else {
            return Err(ParseError::ParseFailed(
                "JSON manifest is not an object".to_string(),
            ));
        };

        let Some(value_node) = self.find_field(document, content) else {
            debug!("Field {:?} not found", self.field_path.join("."));
            return Ok(None);
        };

        if value_node.kind() != "string" {
            debug!(
                "Field {:?} is a {}, not a string",
                self.field_path.join("."),
                value_node.kind()
            );
            return Ok(None);
        }

        Ok(Some(ManifestVersion::from_string_node(value_node, content)))
    }
}

impl PackageJsonParser {
    /// Walk nested objects following the field path
    fn find_field<'tree>(
        &self,
        object_node: tree_sitter::Node<'tree>,
        content: &str,
    ) -> Option<tree_sitter::Node<'tree>> {
        let mut current = object_node;

        for (depth, key) in self.field_path.iter().enumerate() {
            if depth > 0 && current.kind() != "object" {
                return None;
            }
            current = self.find_pair_value(current, content, key)?;
        }

        Some(current)
    }

    /// Find the value of `key` in an object node; the last duplicate wins
    fn find_pair_value<'tree>(
        &self,
        object_node: tree_sitter::Node<'tree>,
        content: &str,
        key: &str,
    ) -> Option<tree_sitter::Node<'tree>> {
        let mut cursor = object_node.walk();
        let mut found = None;

        for child in object_node.children(&mut cursor) {
            if child.kind() != "pair" {
                continue;
            }

            let Some(key_node) = child.child_by_field_name("key") else {
                continue;
            };

            if self.get_string_value(key_node, content) != key {
                continue;
            }

            if let Some(value_node) = child.child_by_field_name("value") {
                found = Some(value_node);
            }
        }

        found
    }

    /// Get the string value from a string node (removes quotes)
    fn get_string_value<'a>(&self, node: tree_sitter::Node, content: &'a str) -> &'a str {
        let text = &content[node.byte_range()];
        text.trim().trim_start_matches('"').trim_end_matches('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_extracts_top_level_field() {
        let parser = PackageJsonParser::new("solcVersion");
        let content = r#"{
  "name": "solc",
  "version": "0.8.21",
  "solcVersion": "0.8.21"
}"#;
        let result = parser.parse(content).unwrap();
        assert_eq!(
            result,
            Some(ManifestVersion {
                version: "0.8.21".to_string(),
                line: 3,
                column: 18,
            })
        );
    }

    #[test]
    fn parse_extracts_version_field() {
        let parser = PackageJsonParser::new("version");
        let content = r#"{"name": "my-lib", "version": "1.2.3-rc.1"}"#;
        let result = parser.parse(content).unwrap().unwrap();
        assert_eq!(result.version, "1.2.3-rc.1");
        assert_eq!(result.line, 0);
        assert_eq!(result.column, 31);
    }

    #[test]
    fn parse_extracts_nested_field() {
        let parser = PackageJsonParser::new("binding.version");
        let content = r#"{
  "name": "my-app",
  "binding": {
    "version": "2.0.0"
  }
}"#;
        let result = parser.parse(content).unwrap().unwrap();
        assert_eq!(result.version, "2.0.0");
        assert_eq!(result.line, 3);
    }

    #[test]
    fn parse_does_not_match_nested_key_at_top_level() {
        let parser = PackageJsonParser::new("version");
        let content = r#"{
  "name": "my-app",
  "binding": { "version": "2.0.0" }
}"#;
        assert_eq!(parser.parse(content).unwrap(), None);
    }

    #[test]
    fn parse_returns_none_for_missing_field() {
        let parser = PackageJsonParser::new("solcVersion");
        let content = r#"{"name": "my-app", "version": "1.0.0"}"#;
        assert_eq!(parser.parse(content).unwrap(), None);
    }

    #[test]
    fn parse_returns_none_for_non_string_field() {
        let parser = PackageJsonParser::new("version");
        let content = r#"{"name": "my-app", "version": 1}"#;
        assert_eq!(parser.parse(content).unwrap(), None);
    }

    #[test]
    fn parse_returns_none_when_path_crosses_non_object() {
        let parser = PackageJsonParser::new("version.major");
        let content = r#"{"version": "1.0.0"}"#;
        assert_eq!(parser.parse(content).unwrap(), None);
    }

    #[test]
    fn parse_uses_last_duplicate_key() {
        let parser = PackageJsonParser::new("version");
        let content = r#"{"version": "1.0.0", "version": "2.0.0"}"#;
        assert_eq!(parser.parse(content).unwrap().unwrap().version, "2.0.0");
    }

    #[test]
    fn parse_keeps_raw_value_for_later_validation() {
        let parser = PackageJsonParser::new("version");
        let content = r#"{"version": "^1.0.0"}"#;
        assert_eq!(parser.parse(content).unwrap().unwrap().version, "^1.0.0");
    }

    #[test]
    fn parse_fails_for_non_object_document() {
        let parser = PackageJsonParser::new("version");
        let result = parser.parse(r#"["1.0.0"]"#);
        assert!(matches!(result, Err(ParseError::ParseFailed(_))));
    }

    #[rstest]
    #[case(r#"{"solcVersion": "0.8.21", "x": }"#)]
    #[case(r#"{"solcVersion": "0.8.21", "main": index.js}"#)]
    #[case(r#"{"solcVersion": "0.8.21""#)]
    #[case(r#"{"solcVersion" "0.8.21"}"#)]
    fn parse_fails_for_broken_syntax(#[case] content: &str) {
        let parser = PackageJsonParser::new("solcVersion");
        assert!(matches!(
            parser.parse(content),
            Err(ParseError::ParseFailed(_))
        ));
    }

    #[test]
    fn parse_fails_for_empty_document() {
        let parser = PackageJsonParser::new("version");
        assert!(matches!(parser.parse(""), Err(ParseError::ParseFailed(_))));
    }
}
