//! Error types surfaced by option-list construction.

use thiserror::Error;

/// Error raised when option-list construction cannot satisfy a request.
///
/// All variants are deterministic given the same configuration and registry
/// state: they signal invalid configuration or a stale identifier supplied by
/// the host application, so callers are expected to let them propagate rather
/// than retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// Raised when a token does not resolve against the active data source.
    #[error("could not find language with string `{token}`")]
    LanguageNotFound {
        /// The offending identifier or display name.
        token: String,
    },
    /// Raised when the configured format name has no registered formatter.
    #[error("unknown format `{name}`")]
    UnknownFormat {
        /// The format name that was requested.
        name: String,
    },
    /// Raised when the configured data-source name has no registered source.
    #[error("unknown data source `{name}`")]
    UnknownDataSource {
        /// The data-source name that was requested.
        name: String,
    },
}
