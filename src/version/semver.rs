use std::cmp::Ordering;

use semver::Version;

/// Strip the decorations tolerated around a version string.
///
/// Accepts surrounding whitespace and a single leading `v`, so `" v1.2.3 "`
/// normalizes to `"1.2.3"`. Anything else (`=1.2.3`, `v 1.2.3`) is left for
/// the parser to reject.
pub fn normalize_version(version: &str) -> &str {
    let trimmed = version.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed)
}

/// Parse a version string into a semver::Version.
///
/// Unlike range specifications, partial versions like "1" or "1.2" are
/// rejected: a declared or reported version must name an exact release.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "v1.2.3-rc.1+sha.abc" -> Version(1, 2, 3, pre: rc.1, build: sha.abc)
/// - "1.2" -> None
pub fn parse_version(version: &str) -> Option<Version> {
    Version::parse(normalize_version(version)).ok()
}

/// Equality under semver precedence: build metadata is ignored.
///
/// `semver::Version`'s own `PartialEq` compares build metadata too,
/// which is why this goes through `cmp_precedence`.
pub fn versions_equal(a: &Version, b: &Version) -> bool {
    a.cmp_precedence(b) == Ordering::Equal
}
