//! Shared tree-sitter helpers for TOML manifests

use tracing::warn;

use crate::parser::traits::ParseError;
use crate::parser::types::unquote;

pub(crate) fn parse_toml(content: &str) -> Result<tree_sitter::Tree, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    let language = tree_sitter_toml_ng::LANGUAGE;
    parser.set_language(&language.into()).map_err(|e| {
        warn!("Failed to set TOML language for tree-sitter: {}", e);
        ParseError::TreeSitter(e.to_string())
    })?;

    let tree = parser.parse(content, None).ok_or_else(|| {
        warn!("Failed to parse TOML content");
        ParseError::ParseFailed("Failed to parse TOML".to_string())
    })?;

    // tree-sitter recovers from syntax errors; a broken manifest is still broken
    if tree.root_node().has_error() {
        warn!("TOML content has syntax errors");
        return Err(ParseError::ParseFailed("Invalid TOML syntax".to_string()));
    }

    Ok(tree)
}

/// Get the header name of a `[table]` node (e.g. "package", "workspace.package")
pub(crate) fn table_name(table_node: tree_sitter::Node, content: &str) -> Option<String> {
    let header = table_node.child(0)?;
    if header.kind() != "[" {
        return None;
    }

    let mut cursor = table_node.walk();
    table_node
        .children(&mut cursor)
        .find(|child| is_key(child.kind()))
        .map(|key| key_text(key, content))
}

/// Find the tables with the given header name
pub(crate) fn find_tables<'tree>(
    root: tree_sitter::Node<'tree>,
    content: &str,
    name: &str,
) -> Vec<tree_sitter::Node<'tree>> {
    let mut cursor = root.walk();
    root.children(&mut cursor)
        .filter(|child| child.kind() == "table")
        .filter(|table| table_name(*table, content).as_deref() == Some(name))
        .collect()
}

/// Iterate the `key = value` pairs of a table, as (normalized key, value node)
pub(crate) fn pairs<'tree>(
    table_node: tree_sitter::Node<'tree>,
    content: &str,
) -> Vec<(String, tree_sitter::Node<'tree>)> {
    let mut cursor = table_node.walk();
    let mut result = Vec::new();

    for child in table_node.children(&mut cursor) {
        if child.kind() != "pair" {
            continue;
        }

        let mut pair_cursor = child.walk();
        let mut key: Option<String> = None;
        let mut value: Option<tree_sitter::Node<'tree>> = None;

        for pair_child in child.children(&mut pair_cursor) {
            match pair_child.kind() {
                kind if is_key(kind) && key.is_none() => {
                    key = Some(key_text(pair_child, content));
                }
                "=" | "comment" => {}
                _ if key.is_some() => value = Some(pair_child),
                _ => {}
            }
        }

        if let (Some(key), Some(value)) = (key, value) {
            result.push((key, value));
        }
    }

    result
}

/// Whether a value node is the literal `true`
pub(crate) fn is_true(node: tree_sitter::Node, content: &str) -> bool {
    node.kind() == "boolean" && content[node.byte_range()].trim() == "true"
}

fn is_key(kind: &str) -> bool {
    matches!(kind, "bare_key" | "dotted_key" | "quoted_key")
}

/// Normalize a key: drop whitespace around dots and quotes around segments
fn key_text(node: tree_sitter::Node, content: &str) -> String {
    content[node.byte_range()]
        .split('.')
        .map(unquote)
        .collect::<Vec<_>>()
        .join(".")
}
