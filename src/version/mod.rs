//! Version layer for declared/actual consistency checking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐                         ┌─────────────┐
//! │  Manifest   │──┐                   ┌──│   Binding   │
//! │  (declared) │  │  ┌─────────────┐  │  │  (actual)   │
//! └─────────────┘  └─▶│   Checker   │◀─┘  └─────────────┘
//!                     │  (compare)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Pure comparison of two version strings
//! - [`error`]: Error types for sources and checks
//! - [`semver`]: Shared semver utilities
//! - [`source`]: Trait for obtaining a version value
//! - [`sources`]: Concrete sources (manifest, binding command, fixed value)

pub mod checker;
pub mod error;
pub mod semver;
pub mod source;
pub mod sources;
