//! Regex-based extraction of version strings from upstream content

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::types::Project;

/// Builds the default extraction pattern for a project, matching
/// `<name>-<version>.tar.gz` style archive names with optional `src` or
/// `source` infixes and the usual tarball/zip extensions.
pub fn default_version_pattern(project_name: &str) -> String {
    format!(
        r"{}(?:[-_]?(?:minsrc|src|source))?[-_]([^-/_\s]+?)(?i:(?:[-_](?:minsrc|src|source))?\.(?:tar|t[bglx]z|tbz2|zip))",
        regex::escape(project_name)
    )
}

/// Fetches `url` and extracts every version matched by `pattern`.
///
/// Any fetch failure is logged and reported as [`Error::FetchFailed`]; the
/// transport detail stays out of the returned error.
pub async fn extract_from_url(
    fetcher: &Fetcher,
    url: &str,
    pattern: &str,
    project: &Project,
) -> Result<Vec<String>, Error> {
    let content = match fetcher.fetch(url).await {
        Ok(content) => content,
        Err(err) => {
            debug!(project = %project.name, error = %err, "fetch failed");
            return Err(Error::FetchFailed {
                project: project.name.clone(),
                url: url.to_string(),
            });
        }
    };

    extract_from_text(&content.into_text(), url, pattern, project)
}

/// Extracts every version matched by `pattern` in `text`.
///
/// Matches are deduplicated. A match with capture groups joins its non-empty
/// groups with `.` into one flat version string; a pattern without groups
/// contributes the whole match text. A candidate containing whitespace means
/// the pattern matched across a boundary it should not have, and the whole
/// call fails rather than keeping a bad entry. The returned order is
/// unspecified.
pub fn extract_from_text(
    text: &str,
    url: &str,
    pattern: &str,
    project: &Project,
) -> Result<Vec<String>, Error> {
    let regex = Regex::new(pattern).map_err(|err| {
        debug!(project = %project.name, error = %err, "invalid pattern");
        Error::InvalidPattern {
            project: project.name.clone(),
        }
    })?;

    // Byte-identical raw matches collapse before normalization.
    let mut raw_matches: HashSet<Vec<String>> = HashSet::new();
    for captures in regex.captures_iter(text) {
        let groups = if captures.len() > 1 {
            (1..captures.len())
                .map(|i| {
                    captures
                        .get(i)
                        .map_or_else(String::new, |m| m.as_str().to_string())
                })
                .collect()
        } else {
            vec![captures[0].to_string()]
        };
        raw_matches.insert(groups);
    }

    let mut versions = HashSet::new();
    for groups in raw_matches {
        // The whitespace check has to run on the joined form: with several
        // groups, joining is what can introduce the space.
        let version = groups
            .iter()
            .filter(|group| !group.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".");

        if version.contains(char::is_whitespace) {
            return Err(Error::InvalidVersionString {
                project: project.name.clone(),
                version,
                url: url.to_string(),
                pattern: pattern.to_string(),
            });
        }
        versions.insert(version);
    }

    if versions.is_empty() {
        return Err(Error::NoVersionFound {
            project: project.name.clone(),
            url: url.to_string(),
            pattern: pattern.to_string(),
        });
    }

    Ok(versions.into_iter().collect())
}
