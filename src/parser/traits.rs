//! Parser trait definition

use crate::parser::types::ManifestVersion;

/// Trait for extracting the declared version from a manifest
pub trait ManifestParser {
    /// Parse the content and extract the declared version
    ///
    /// Returns `Ok(None)` when the manifest parses but declares no version
    /// where this parser looks for one.
    fn parse(&self, content: &str) -> Result<Option<ManifestVersion>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
