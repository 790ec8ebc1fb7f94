use thiserror::Error;

/// Errors from loading or validating application configuration.
///
/// Every env var currently has a default or is optional, so the only failure
/// mode is a value that does not parse.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A string could not be parsed as a `YYMMDD` date key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateKeyError {
    /// The key is not exactly six characters.
    #[error("date key '{0}' must be exactly six characters")]
    WrongLength(String),

    /// The key contains something other than ASCII digits.
    #[error("date key '{0}' must contain only ASCII digits")]
    NotNumeric(String),

    /// The digits do not name a real calendar date (month 13, day 32, ...).
    #[error("date key '{0}' is not a valid calendar date")]
    ImpossibleDate(String),
}

/// Errors from view-projection arithmetic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// Discovery rate is undefined when zero tweets were analyzed.
    #[error("discovery rate is undefined: total_tweets_analyzed is zero")]
    DivisionUndefined,
}
