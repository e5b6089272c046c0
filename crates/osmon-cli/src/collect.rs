//! The `collect` command: collect, classify, store and log a search.

use osmon_core::{AppConfig, Mention};
use osmon_db::{MentionId, MentionStore, QueryRecord};
use osmon_sentiment::{
    collect_from, platform_summary, sentiment_summary, CollectorSettings, RedditCredentials,
    SentimentClassifier, TwitterCredentials,
};

/// Sources searched when neither the command line nor the watchlist names any.
const DEFAULT_SOURCES: &[&str] = &["web", "news", "social"];

/// What one collection run searches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollectionRequest {
    pub keywords: Vec<String>,
    pub sources: Vec<String>,
    pub max_results: usize,
}

#[derive(Debug)]
pub(crate) struct CollectionOutcome {
    pub ids: Vec<MentionId>,
    pub mentions: Vec<Mention>,
}

/// Fill in whatever the command line left out.
///
/// Missing keywords come from the watchlist file, missing sources from the
/// watchlist (when it was loaded) or the built-in defaults, and a missing cap
/// from the configured `max_results`.
///
/// # Errors
///
/// Returns an error if no keywords were given and the watchlist cannot be
/// loaded, or if `max_results` is zero.
pub(crate) fn resolve_request(
    config: &AppConfig,
    keywords: Vec<String>,
    sources: Vec<String>,
    max_results: Option<usize>,
) -> anyhow::Result<CollectionRequest> {
    let (keywords, watchlist_sources) = if keywords.is_empty() {
        let watchlist = osmon_core::load_watchlist(&config.watchlist_path).map_err(|e| {
            anyhow::anyhow!(
                "no --keyword given and watchlist {} could not be loaded: {e}",
                config.watchlist_path.display()
            )
        })?;
        (watchlist.keywords, Some(watchlist.sources))
    } else {
        (keywords, None)
    };

    let sources = if !sources.is_empty() {
        sources
    } else if let Some(listed) = watchlist_sources.filter(|s| !s.is_empty()) {
        listed
    } else {
        DEFAULT_SOURCES.iter().map(ToString::to_string).collect()
    };

    let max_results = max_results.unwrap_or(config.max_results);
    if max_results == 0 {
        anyhow::bail!("--max-results must be greater than zero");
    }

    Ok(CollectionRequest {
        keywords,
        sources,
        max_results,
    })
}

/// Collect from every requested source, classify, save and log the search.
///
/// Platform credentials present in `config` are handed to the collectors.
///
/// # Errors
///
/// Returns an error if a source is unknown or the store cannot be written.
/// A source that fails while collecting is logged and skipped.
pub(crate) fn run_collection(
    store: &mut dyn MentionStore,
    classifier: &SentimentClassifier,
    request: &CollectionRequest,
    config: &AppConfig,
) -> anyhow::Result<CollectionOutcome> {
    let settings = CollectorSettings::new(request.keywords.clone(), request.max_results)
        .with_twitter(twitter_credentials(config))
        .with_reddit(reddit_credentials(config));

    let records = collect_from(&request.sources, &settings)?;
    tracing::info!(
        sources = ?request.sources,
        keywords = ?request.keywords,
        raw = records.len(),
        "collection finished"
    );

    let mentions = osmon_sentiment::ingest(records, &request.keywords, classifier);
    let ids = store.insert_many(mentions.clone())?;
    store.log_query(QueryRecord::new(
        request.keywords.clone(),
        request.sources.clone(),
        mentions.len(),
    ))?;

    Ok(CollectionOutcome { ids, mentions })
}

/// Handler for `osmon collect`.
///
/// # Errors
///
/// Returns an error if the request cannot be resolved or the run fails.
pub(crate) fn run_collect(
    config: &AppConfig,
    store: &mut dyn MentionStore,
    keywords: Vec<String>,
    sources: Vec<String>,
    max_results: Option<usize>,
) -> anyhow::Result<()> {
    let request = resolve_request(config, keywords, sources, max_results)?;
    let classifier = SentimentClassifier::default();

    println!(
        "collecting [{}] from [{}] (max {} per keyword)",
        request.keywords.join(", "),
        request.sources.join(", "),
        request.max_results
    );

    let outcome = run_collection(store, &classifier, &request, config)?;
    if outcome.mentions.is_empty() {
        println!("no mentions found");
        return Ok(());
    }

    let counts = sentiment_summary(&outcome.mentions);
    println!("saved {} mentions", outcome.ids.len());
    println!(
        "sentiment: {} positive, {} negative, {} neutral",
        counts.positive, counts.negative, counts.neutral
    );
    for source in platform_summary(&outcome.mentions) {
        println!("  {:<12}{}", source.source, source.count);
    }
    Ok(())
}

fn twitter_credentials(config: &AppConfig) -> Option<TwitterCredentials> {
    match (&config.twitter_api_key, &config.twitter_api_secret) {
        (Some(api_key), Some(api_secret)) => Some(TwitterCredentials {
            api_key: api_key.clone(),
            api_secret: api_secret.clone(),
        }),
        _ => None,
    }
}

fn reddit_credentials(config: &AppConfig) -> Option<RedditCredentials> {
    match (&config.reddit_client_id, &config.reddit_client_secret) {
        (Some(client_id), Some(client_secret)) => Some(RedditCredentials {
            client_id: client_id.clone(),
            client_secret: client_secret.clone(),
            user_agent: config.reddit_user_agent.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
