//! HTTP artifact store.
//!
//! Wraps `reqwest` for the one wire-level contract this system has: a GET of
//! `<base>/<DateKey>_analysis.json` returning the analysis-document JSON
//! shape, or a 404 when no artifact exists for that day.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use ideaboard_core::{AnalysisDocument, DateKey};

use crate::error::LoadError;

/// Read-only client for a remote artifact store.
///
/// Use [`HttpArtifactStore::with_base_url`] to point at a mock server in
/// tests.
#[derive(Debug, Clone)]
pub struct HttpArtifactStore {
    client: Client,
    base_url: Url,
}

impl HttpArtifactStore {
    /// Creates a store rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`LoadError::InvalidBaseUrl`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ideaboard/0.1 (analysis-dashboard)")
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the
        // artifact filename instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| LoadError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Fetches and parses the artifact for `key`.
    ///
    /// Repeated loads of the same key are idempotent; the store is read-only
    /// from here.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] on a 404 (expected absence).
    /// - [`LoadError::Timeout`] when the request exceeds the client timeout.
    /// - [`LoadError::Http`] on network failure or other non-2xx status.
    /// - [`LoadError::Malformed`] when the body is not an analysis document.
    pub async fn load(&self, key: DateKey) -> Result<AnalysisDocument, LoadError> {
        let url = self.artifact_url(key)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_reqwest(key, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(%key, "no artifact for date key");
            return Err(LoadError::NotFound { key });
        }

        let response = response
            .error_for_status()
            .map_err(|e| classify_reqwest(key, e))?;
        let body = response.text().await.map_err(|e| classify_reqwest(key, e))?;

        serde_json::from_str(&body).map_err(|source| {
            tracing::error!(%key, %url, error = %source, "artifact failed to parse");
            LoadError::Malformed { key, source }
        })
    }

    fn artifact_url(&self, key: DateKey) -> Result<Url, LoadError> {
        self.base_url
            .join(&format!("{key}_analysis.json"))
            .map_err(|_| LoadError::InvalidBaseUrl(self.base_url.to_string()))
    }
}

fn classify_reqwest(key: DateKey, error: reqwest::Error) -> LoadError {
    if error.is_timeout() {
        LoadError::Timeout { key }
    } else {
        LoadError::Http(error)
    }
}
