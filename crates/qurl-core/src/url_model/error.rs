//! Errors raised while assembling URLs.

use thiserror::Error;

/// Error returned by URL building and variable insertion.
#[derive(Debug, Error)]
pub enum UrlError {
    /// The assembled text is not a valid URL.
    #[error("malformed URL {url:?}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Variable names must be non-empty.
    #[error("variable name must not be empty")]
    EmptyVariableName,
}
