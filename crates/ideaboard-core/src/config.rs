use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("IDEABOARD_ENV", "development"));
    let bind_addr = parse_addr("IDEABOARD_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("IDEABOARD_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("IDEABOARD_DATA_DIR", "./data/analysis"));
    let data_url = lookup("IDEABOARD_DATA_URL").ok();
    let available_dates = lookup("IDEABOARD_DATES")
        .ok()
        .map(|raw| parse_date_list(&raw))
        .transpose()?;
    let request_timeout_secs = parse_u64("IDEABOARD_REQUEST_TIMEOUT_SECS", "10")?;
    let load_timeout_secs = parse_u64("IDEABOARD_LOAD_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        data_dir,
        data_url,
        available_dates,
        request_timeout_secs,
        load_timeout_secs,
    })
}

/// Parses a comma-separated `YYMMDD` list (e.g. `"250725,250726"`).
fn parse_date_list(raw: &str) -> Result<Vec<crate::DateKey>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|e: crate::DateKeyError| {
                ConfigError::InvalidEnvVar {
                    var: "IDEABOARD_DATES".to_string(),
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
