//! Total-order sorting of arbitrary version strings
//!
//! Upstream versions are whatever a regex pulled out of a release page, so
//! the sort has to accept anything: semver comparison where the string
//! parses, byte order where it does not. It never fails and always returns a
//! permutation of its input.

use semver::Version;

/// Parse a version string into a semver::Version, normalizing partial
/// versions and an optional `v` prefix.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "v1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Sorts version strings ascending, oldest first.
///
/// Versions that parse as (possibly partial) semver compare semantically;
/// the rest fall back to byte order and sort before any parseable version.
/// Equal semver values are tie-broken on the original string so the order
/// stays total.
pub fn order_versions(mut versions: Vec<String>) -> Vec<String> {
    versions.sort_by_cached_key(|v| (parse_version(v), v.clone()));
    versions
}
