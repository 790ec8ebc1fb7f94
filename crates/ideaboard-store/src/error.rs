use ideaboard_core::DateKey;
use thiserror::Error;

/// Typed outcomes of an artifact load.
///
/// Every failure crossing the loader boundary is one of these; callers never
/// see a raw `reqwest`/io error or a panic. `NotFound` is an expected,
/// non-exceptional outcome and is kept distinct from `Malformed` so the UI
/// can say "no data for this date" rather than "data is corrupted".
#[derive(Debug, Error)]
pub enum LoadError {
    /// No artifact exists for this key.
    #[error("no artifact for date key {key}")]
    NotFound { key: DateKey },

    /// The artifact exists but does not parse as an analysis document.
    #[error("artifact for {key} is malformed: {source}")]
    Malformed {
        key: DateKey,
        #[source]
        source: serde_json::Error,
    },

    /// The load did not complete within its time budget.
    #[error("loading artifact for {key} timed out")]
    Timeout { key: DateKey },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure other than a missing file.
    #[error("I/O error reading artifact for {key}: {source}")]
    Io {
        key: DateKey,
        #[source]
        source: std::io::Error,
    },

    /// The configured artifact base URL could not be parsed.
    #[error("invalid artifact base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl LoadError {
    /// True for the expected-absence case, which the UI messages differently
    /// from real failures.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
