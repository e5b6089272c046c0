use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tracked keywords and the sources to search for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    pub keywords: Vec<String>,
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

fn default_sources() -> Vec<String> {
    vec!["web".to_string(), "news".to_string(), "social".to_string()]
}

/// Load and validate a watchlist from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watchlist(path: &Path) -> Result<Watchlist, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchlistIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let watchlist: Watchlist = serde_yaml::from_str(&content)?;
    validate_watchlist(&watchlist)?;

    Ok(watchlist)
}

fn validate_watchlist(watchlist: &Watchlist) -> Result<(), ConfigError> {
    if watchlist.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "watchlist must track at least one keyword".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for keyword in &watchlist.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords must be non-empty".to_string(),
            ));
        }
        if !seen.insert(keyword.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword: '{keyword}'"
            )));
        }
    }

    if watchlist.sources.iter().any(|s| s.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "sources must be non-empty".to_string(),
        ));
    }

    Ok(())
}
