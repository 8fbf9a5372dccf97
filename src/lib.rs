//! Declared/actual version consistency checking
//!
//! Compares the version declared in a package manifest with the version a
//! runtime binding reports, under semantic-version equality.
//!
//! # Modules
//!
//! - [`cli`]: Report printing and exit status
//! - [`config`]: Defaults, exit codes and environment overrides
//! - [`parser`]: Manifest parsers (package.json, Cargo.toml, pyproject.toml)
//! - [`version`]: Version sources and the consistency check

pub mod cli;
pub mod config;
pub mod parser;
pub mod version;
