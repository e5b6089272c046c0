use std::path::PathBuf;

use serde::Serialize;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can drive it
/// from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let parse_positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("OSMON_ENV", "development"));
    let database_path = PathBuf::from(or_default("OSMON_DATABASE_PATH", "./data/osmon.json"));
    let log_level = or_default("OSMON_LOG_LEVEL", "info");
    let watchlist_path = PathBuf::from(or_default(
        "OSMON_WATCHLIST_PATH",
        "./config/watchlist.yaml",
    ));
    let max_results = parse_positive_usize("OSMON_MAX_RESULTS", "10")?;

    Ok(AppConfig {
        env,
        database_path,
        log_level,
        watchlist_path,
        max_results,
        twitter_api_key: optional("TWITTER_API_KEY"),
        twitter_api_secret: optional("TWITTER_API_SECRET"),
        reddit_client_id: optional("REDDIT_CLIENT_ID"),
        reddit_client_secret: optional("REDDIT_CLIENT_SECRET"),
        reddit_user_agent: optional("REDDIT_USER_AGENT"),
    })
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

/// Non-secret view of the configuration, safe to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub env: String,
    pub database_path: String,
    pub log_level: String,
    pub watchlist_path: String,
    pub max_results: usize,
    pub twitter_configured: bool,
    pub reddit_configured: bool,
}

#[must_use]
pub fn config_summary(config: &AppConfig) -> ConfigSummary {
    ConfigSummary {
        env: config.env.to_string(),
        database_path: config.database_path.display().to_string(),
        log_level: config.log_level.clone(),
        watchlist_path: config.watchlist_path.display().to_string(),
        max_results: config.max_results,
        twitter_configured: config.twitter_configured(),
        reddit_configured: config.reddit_configured(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
