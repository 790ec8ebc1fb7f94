//! Filesystem artifact store.
//!
//! Reads `<dir>/<DateKey>_analysis.json`, the layout the daily categorizer
//! job writes into. This is the backend the dashboard uses when serving from
//! the same checkout the job commits artifacts to.

use std::io::ErrorKind;
use std::path::PathBuf;

use ideaboard_core::{AnalysisDocument, DateKey};

use crate::error::LoadError;

#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    dir: PathBuf,
}

impl FsArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads and parses the artifact for `key`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] when the file does not exist.
    /// - [`LoadError::Io`] on any other filesystem failure.
    /// - [`LoadError::Malformed`] when the file is not an analysis document.
    pub async fn load(&self, key: DateKey) -> Result<AnalysisDocument, LoadError> {
        let path = self.artifact_path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                tracing::error!(%key, path = %path.display(), error = %source, "artifact failed to parse");
                LoadError::Malformed { key, source }
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(%key, "no artifact for date key");
                Err(LoadError::NotFound { key })
            }
            Err(source) => Err(LoadError::Io { key, source }),
        }
    }

    fn artifact_path(&self, key: DateKey) -> PathBuf {
        self.dir.join(format!("{key}_analysis.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_path_uses_key_and_suffix() {
        let store = FsArtifactStore::new("/data/analysis");
        let key: DateKey = "250725".parse().expect("valid key");
        assert_eq!(
            store.artifact_path(key),
            PathBuf::from("/data/analysis/250725_analysis.json")
        );
    }
}
