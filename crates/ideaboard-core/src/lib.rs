//! Core data model and view projection for the ideaboard dashboard.
//!
//! Defines the analysis-document shape produced by the daily categorizer run,
//! the `YYMMDD` date keys that index one document per day, and the pure
//! aggregation functions (top-N ideas, category histogram, discovery rate)
//! that the presentation layer renders.

mod app_config;
pub mod config;
pub mod date;
mod error;
pub mod project;
mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use date::DateKey;
pub use error::{ConfigError, DateKeyError, ProjectionError};
pub use types::{AnalysisDocument, AnalysisSummary, IdeaCluster, TokenUsage, Tweet};
