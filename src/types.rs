//! Caller-supplied project identity

use serde::Deserialize;

/// A monitored project, as configured by the calling layer.
///
/// The core only reads from it: `name` attributes errors to a project, the
/// remaining fields are the per-project upstream configuration the caller
/// forwards into the fetcher and extractor.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Project {
    /// Project name, used in error messages
    pub name: String,
    /// Upstream homepage
    #[serde(default)]
    pub homepage: Option<String>,
    /// URL to fetch when looking for new versions
    #[serde(default)]
    pub version_url: Option<String>,
    /// Custom extraction pattern, for when the default tarball pattern does
    /// not fit the upstream's naming
    #[serde(default)]
    pub regex: Option<String>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
