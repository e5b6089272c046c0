pub mod app_config;
pub mod config;
pub mod mention;
pub mod text;
pub mod watchlist;

pub use app_config::{AppConfig, Environment};
pub use config::{config_summary, load_app_config, load_app_config_from_env, ConfigSummary};
pub use mention::{
    match_keywords, Engagement, Mention, Metadata, RawRecord, SentimentCounts, SentimentLabel,
    SentimentResult,
};
pub use watchlist::{load_watchlist, Watchlist};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid sentiment label: {0} (expected positive, negative or neutral)")]
    InvalidSentiment(String),
    #[error("mention content must be non-empty (platform: {platform})")]
    EmptyContent { platform: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("failed to read watchlist file {path}: {source}")]
    WatchlistIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse watchlist file: {0}")]
    WatchlistParse(#[from] serde_yaml::Error),
    #[error("watchlist validation failed: {0}")]
    Validation(String),
}
