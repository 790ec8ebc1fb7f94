//! Artifact loading for the ideaboard dashboard.
//!
//! The artifact store is a flat, read-only collection of date-keyed JSON
//! documents, one per day, written by the excluded categorizer job. This
//! crate resolves a [`DateKey`](ideaboard_core::DateKey) to its document over
//! HTTP or from local disk, converts every I/O failure into a typed
//! [`LoadError`] at the boundary, and enumerates which keys have artifacts
//! via pluggable [`DateCatalog`] providers.

pub mod catalog;
mod error;
mod fs;
mod http;
mod store;

pub use catalog::{DateCatalog, DirCatalog, StaticCatalog};
pub use error::LoadError;
pub use fs::FsArtifactStore;
pub use http::HttpArtifactStore;
pub use store::{ArtifactBackend, ArtifactStore};
