//! Read-only store views plus the `clear` and `config` commands.

use osmon_core::text::truncate_chars;
use osmon_core::AppConfig;
use osmon_db::{MentionFilter, MentionStore};
use osmon_sentiment::engagement_summary;

const CONTENT_PREVIEW_CHARS: usize = 60;

/// Combine the dedicated filter flags with `--filter key=value` pairs.
///
/// # Errors
///
/// Returns an error for an unknown filter key, a malformed pair or an unknown
/// sentiment label.
pub(crate) fn build_filter(
    source: Option<&str>,
    keyword: Option<&str>,
    sentiment: Option<&str>,
    pairs: &[String],
) -> anyhow::Result<MentionFilter> {
    let mut filter = MentionFilter::new();
    if let Some(source) = source {
        filter = filter.with("source", source)?;
    }
    if let Some(keyword) = keyword {
        filter = filter.with("keyword", keyword)?;
    }
    if let Some(sentiment) = sentiment {
        filter = filter.with("sentiment", sentiment)?;
    }
    for pair in pairs {
        filter = filter.with_pair(pair)?;
    }
    Ok(filter)
}

/// List stored mentions matching `filter`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub(crate) fn run_mentions(
    store: &dyn MentionStore,
    filter: &MentionFilter,
    limit: usize,
) -> anyhow::Result<()> {
    let rows = store.query(filter, Some(limit))?;

    if rows.is_empty() {
        println!("no mentions found; run `osmon collect` first");
        return Ok(());
    }

    println!(
        "{:<6}{:<12}{:<10}{:<18}CONTENT",
        "ID", "SOURCE", "SENTIMENT", "SAVED"
    );
    for row in &rows {
        let label = row
            .mention
            .sentiment_label()
            .map_or("-", |l| l.as_str());
        println!(
            "{:<6}{:<12}{:<10}{:<18}{}",
            row.id,
            row.mention.source,
            label,
            row.saved_at.format("%Y-%m-%d %H:%M"),
            truncate_chars(&row.mention.content, CONTENT_PREVIEW_CHARS)
        );
    }
    Ok(())
}

/// Print store-wide counts and engagement totals.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub(crate) fn run_stats(store: &dyn MentionStore) -> anyhow::Result<()> {
    let stats = store.statistics()?;
    let mentions = store.query(&MentionFilter::new(), None)?;
    let engagement = engagement_summary(&mentions);

    println!("total mentions: {}", stats.total_mentions);
    println!("total queries:  {}", stats.total_queries);
    println!();
    println!("sentiment:");
    println!("  positive  {}", stats.sentiments.positive);
    println!("  negative  {}", stats.sentiments.negative);
    println!("  neutral   {}", stats.sentiments.neutral);
    println!();
    println!("sources:");
    for (source, count) in &stats.sources {
        println!("  {source:<12}{count}");
    }
    println!();
    println!(
        "engagement: {} likes, {} shares, {} comments ({} total)",
        engagement.likes, engagement.shares, engagement.comments, engagement.total
    );
    Ok(())
}

/// Clear the store. Refuses to do anything unless `confirmed`.
///
/// # Errors
///
/// Returns an error if not confirmed or if the store cannot be written.
pub(crate) fn run_clear(
    store: &mut dyn MentionStore,
    confirmed: bool,
    mentions_only: bool,
) -> anyhow::Result<()> {
    if !confirmed {
        anyhow::bail!("refusing to clear the store without --yes");
    }

    let before = store.statistics()?;
    if mentions_only {
        store.clear()?;
    } else {
        store.clear_all()?;
    }

    tracing::info!(
        mentions = before.total_mentions,
        queries = if mentions_only { 0 } else { before.total_queries },
        "store cleared"
    );
    println!("cleared {} mentions", before.total_mentions);
    Ok(())
}

/// Print the non-secret configuration as JSON.
///
/// # Errors
///
/// Returns an error if the summary cannot be serialized.
pub(crate) fn run_config(config: &AppConfig) -> anyhow::Result<()> {
    let summary = osmon_core::config_summary(config);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use osmon_core::{Mention, RawRecord, SentimentLabel};
    use osmon_db::{MemoryStore, QueryRecord, StoreError};

    use super::*;

    fn seeded() -> MemoryStore {
        let mut store = MemoryStore::new();
        let raw = RawRecord::new("rust release", "news", Utc::now());
        store
            .insert(Mention::from_raw(raw, &["rust"]).unwrap())
            .unwrap();
        store
            .log_query(QueryRecord::new(vec!["rust".to_string()], Vec::new(), 1))
            .unwrap();
        store
    }

    #[test]
    fn build_filter_merges_flags_and_pairs() {
        let filter = build_filter(
            Some("twitter"),
            None,
            Some("positive"),
            &["keyword=ai".to_string()],
        )
        .unwrap();
        assert_eq!(filter.source.as_deref(), Some("twitter"));
        assert_eq!(filter.keyword.as_deref(), Some("ai"));
        assert_eq!(filter.sentiment, Some(SentimentLabel::Positive));
    }

    #[test]
    fn build_filter_rejects_unknown_key() {
        let err = build_filter(None, None, None, &["author=bob".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::UnsupportedFilter(k)) if k == "author"
        ));
    }

    #[test]
    fn build_filter_rejects_unknown_sentiment() {
        assert!(build_filter(None, None, Some("furious"), &[]).is_err());
    }

    #[test]
    fn clear_requires_confirmation() {
        let mut store = seeded();
        assert!(run_clear(&mut store, false, false).is_err());
        assert_eq!(store.statistics().unwrap().total_mentions, 1);
    }

    #[test]
    fn clear_mentions_only_keeps_query_log() {
        let mut store = seeded();
        run_clear(&mut store, true, true).unwrap();
        let stats = store.statistics().unwrap();
        assert_eq!(stats.total_mentions, 0);
        assert_eq!(stats.total_queries, 1);
    }

    #[test]
    fn clear_all_empties_everything() {
        let mut store = seeded();
        run_clear(&mut store, true, false).unwrap();
        let stats = store.statistics().unwrap();
        assert_eq!(stats.total_mentions, 0);
        assert_eq!(stats.total_queries, 0);
    }

    #[test]
    fn read_views_handle_empty_and_seeded_stores() {
        let empty = MemoryStore::new();
        run_mentions(&empty, &MentionFilter::new(), 10).unwrap();
        run_stats(&empty).unwrap();

        let store = seeded();
        run_mentions(&store, &MentionFilter::new().source("news"), 10).unwrap();
        run_stats(&store).unwrap();
    }
}
