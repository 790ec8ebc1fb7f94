//! Available-date providers.
//!
//! The dashboard's date picker needs to know which keys have artifacts. That
//! set is behind a trait so a deployment can back it with a fixed list, a
//! directory scan, or an index file without touching the shell.

use std::path::PathBuf;
use std::str::FromStr;

use ideaboard_core::DateKey;

/// Enumerates the date keys for which an artifact is known to exist.
pub trait DateCatalog: Send + Sync {
    /// Keys in ascending calendar order. Empty when nothing is available;
    /// never an error.
    fn available_keys(&self) -> Vec<DateKey>;
}

/// A fixed, configured list of keys. Sorted and deduplicated at
/// construction.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    keys: Vec<DateKey>,
}

impl StaticCatalog {
    pub fn new(keys: impl IntoIterator<Item = DateKey>) -> Self {
        let mut keys: Vec<DateKey> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();
        Self { keys }
    }
}

impl DateCatalog for StaticCatalog {
    fn available_keys(&self) -> Vec<DateKey> {
        self.keys.clone()
    }
}

/// Scans a directory for `<key>_analysis.json` entries.
///
/// Files that do not match the naming scheme, or whose key part does not
/// parse, are skipped. An unreadable directory logs a warning and yields an
/// empty list; the picker renders empty rather than the dashboard failing.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    dir: PathBuf,
}

impl DirCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DateCatalog for DirCatalog {
    fn available_keys(&self) -> Vec<DateKey> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), error = %e, "artifact directory unreadable");
                return Vec::new();
            }
        };

        let mut keys: Vec<DateKey> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter_map(|name| {
                name.strip_suffix("_analysis.json")
                    .and_then(|stem| DateKey::from_str(stem).ok())
            })
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}
