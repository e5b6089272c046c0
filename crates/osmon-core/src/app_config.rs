use std::path::PathBuf;

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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// JSON file backing the mention store.
    pub database_path: PathBuf,
    pub log_level: String,
    pub watchlist_path: PathBuf,
    /// Per-source cap handed to collectors.
    pub max_results: usize,
    pub twitter_api_key: Option<String>,
    pub twitter_api_secret: Option<String>,
    pub reddit_client_id: Option<String>,
    pub reddit_client_secret: Option<String>,
    pub reddit_user_agent: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn twitter_configured(&self) -> bool {
        self.twitter_api_key.is_some() && self.twitter_api_secret.is_some()
    }

    #[must_use]
    pub fn reddit_configured(&self) -> bool {
        self.reddit_client_id.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[redacted]");
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("database_path", &self.database_path)
            .field("log_level", &self.log_level)
            .field("watchlist_path", &self.watchlist_path)
            .field("max_results", &self.max_results)
            .field("twitter_api_key", &redact(&self.twitter_api_key))
            .field("twitter_api_secret", &redact(&self.twitter_api_secret))
            .field("reddit_client_id", &redact(&self.reddit_client_id))
            .field("reddit_client_secret", &redact(&self.reddit_client_secret))
            .field("reddit_user_agent", &self.reddit_user_agent)
            .finish()
    }
}
