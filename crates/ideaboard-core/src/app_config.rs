use std::net::SocketAddr;
use std::path::PathBuf;

use crate::date::DateKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the dashboard server.
///
/// Exactly one artifact backend is active: `data_url` selects the HTTP store
/// when set, otherwise artifacts are read from `data_dir` on local disk (the
/// layout the daily job writes into).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Local artifact directory, one `<key>_analysis.json` per day.
    pub data_dir: PathBuf,
    /// Optional remote artifact base URL; takes precedence over `data_dir`.
    pub data_url: Option<String>,
    /// Optional fixed list of available dates. When unset, availability is
    /// discovered by scanning `data_dir`.
    pub available_dates: Option<Vec<DateKey>>,
    /// Per-request timeout for the HTTP artifact store.
    pub request_timeout_secs: u64,
    /// Overall budget for one load before the shell surfaces a timeout.
    pub load_timeout_secs: u64,
}
