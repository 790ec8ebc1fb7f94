use std::future::Future;

use ideaboard_core::{AnalysisDocument, AppConfig, DateKey};

use crate::error::LoadError;
use crate::fs::FsArtifactStore;
use crate::http::HttpArtifactStore;

/// A read-only source of analysis documents keyed by date.
///
/// Loads are asynchronous, idempotent, and side-effect-free; implementations
/// convert every I/O failure to a [`LoadError`] before returning. Futures are
/// `Send` so callers can spawn loads onto the runtime and race them against
/// newer selections.
pub trait ArtifactStore: Send + Sync {
    fn load(
        &self,
        key: DateKey,
    ) -> impl Future<Output = Result<AnalysisDocument, LoadError>> + Send;
}

impl ArtifactStore for HttpArtifactStore {
    fn load(
        &self,
        key: DateKey,
    ) -> impl Future<Output = Result<AnalysisDocument, LoadError>> + Send {
        HttpArtifactStore::load(self, key)
    }
}

impl ArtifactStore for FsArtifactStore {
    fn load(
        &self,
        key: DateKey,
    ) -> impl Future<Output = Result<AnalysisDocument, LoadError>> + Send {
        FsArtifactStore::load(self, key)
    }
}

/// Config-selected artifact backend: remote HTTP store when a data URL is
/// configured, local directory otherwise.
#[derive(Debug, Clone)]
pub enum ArtifactBackend {
    Http(HttpArtifactStore),
    Fs(FsArtifactStore),
}

impl ArtifactBackend {
    /// Builds the backend named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidBaseUrl`] or [`LoadError::Http`] when the
    /// configured data URL is unusable.
    pub fn from_config(config: &AppConfig) -> Result<Self, LoadError> {
        match &config.data_url {
            Some(url) => Ok(Self::Http(HttpArtifactStore::with_base_url(
                url,
                config.request_timeout_secs,
            )?)),
            None => Ok(Self::Fs(FsArtifactStore::new(&config.data_dir))),
        }
    }
}

impl ArtifactStore for ArtifactBackend {
    fn load(
        &self,
        key: DateKey,
    ) -> impl Future<Output = Result<AnalysisDocument, LoadError>> + Send {
        async move {
            match self {
                ArtifactBackend::Http(store) => store.load(key).await,
                ArtifactBackend::Fs(store) => store.load(key).await,
            }
        }
    }
}
