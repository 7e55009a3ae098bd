use thiserror::Error;

/// Failure of a single upstream check.
///
/// Every extraction and backend failure surfaces as one of these variants,
/// carrying enough context (project name, URL, pattern) for diagnostics.
/// Underlying transport errors are logged before being wrapped and never
/// reach callers directly.
#[derive(Debug, Error)]
pub enum Error {
    /// The upstream URL could not be retrieved
    #[error("could not call: \"{url}\" of \"{project}\"")]
    FetchFailed { project: String, url: String },

    /// The extraction pattern is not valid regex syntax
    #[error("{project}: invalid regular expression")]
    InvalidPattern { project: String },

    /// A normalized candidate contained whitespace, meaning the pattern
    /// matched across a boundary it should not have
    #[error("{project}: invalid upstream version: >{version}< - {url} - {pattern}")]
    InvalidVersionString {
        project: String,
        version: String,
        url: String,
        pattern: String,
    },

    /// The pattern produced no usable candidates
    #[error("{project}: no upstream version found. - {url} - {pattern}")]
    NoVersionFound {
        project: String,
        url: String,
        pattern: String,
    },
}

/// Transport-level fetch failure.
///
/// Stays inside the crate: the extractor logs it and converts it to
/// [`Error::FetchFailed`] before anything crosses the component boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FTP error: {0}")]
    Ftp(#[from] suppaftp::FtpError),

    #[error("FTP task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Could not resolve host: {0}")]
    UnresolvedHost(String),

    #[error("TLS setup failed: {0}")]
    Tls(String),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}
