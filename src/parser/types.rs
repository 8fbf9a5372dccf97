//! Common types for parsers

use std::path::Path;

/// Kind of manifest file a declared version can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// Any JSON manifest (package.json, deno.json, jsr.json)
    Json,
    /// Cargo manifest (Cargo.toml)
    CargoToml,
    /// Python project metadata (pyproject.toml)
    PyprojectToml,
}

impl ManifestKind {
    /// Returns the string representation of the manifest kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKind::Json => "json",
            ManifestKind::CargoToml => "cargo_toml",
            ManifestKind::PyprojectToml => "pyproject_toml",
        }
    }
}

/// Detect the manifest kind from its file name
pub fn detect_manifest_kind(path: &Path) -> Option<ManifestKind> {
    let file_name = path.file_name()?.to_str()?;

    if file_name == "Cargo.toml" {
        Some(ManifestKind::CargoToml)
    } else if file_name == "pyproject.toml" {
        Some(ManifestKind::PyprojectToml)
    } else if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        Some(ManifestKind::Json)
    } else {
        None
    }
}

/// Version value found in a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion {
    /// Raw version text, without quotes
    pub version: String,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl ManifestVersion {
    /// Build from a string literal node, skipping its opening quote
    pub(crate) fn from_string_node(node: tree_sitter::Node, content: &str) -> Self {
        let start_point = node.start_position();
        Self {
            version: unquote(&content[node.byte_range()]).to_string(),
            line: start_point.row,
            column: start_point.column + 1,
        }
    }
}

/// Remove the outer quotes from a JSON or TOML string literal
///
/// TOML strings are either "..." or '...' (literal string)
pub(crate) fn unquote(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if trimmed.len() >= 2 * quote.len()
            && trimmed.starts_with(quote)
            && trimmed.ends_with(quote)
        {
            return &trimmed[quote.len()..trimmed.len() - quote.len()];
        }
    }
    trimmed
}
