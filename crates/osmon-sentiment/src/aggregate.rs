//! Summaries over a set of mentions.
//!
//! Every function recomputes from its input and returns a fresh value. Inputs
//! are generic over `AsRef<Mention>` so both fresh and stored mentions work.

use osmon_core::{Mention, SentimentCounts, SentimentLabel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementTotals {
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
    pub total: u64,
}

/// Full statistics used for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentStatistics {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    pub avg_polarity: f64,
    pub avg_subjectivity: f64,
}

/// Count mentions by label. Unclassified mentions are skipped.
pub fn sentiment_summary<M: AsRef<Mention>>(mentions: &[M]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for label in mentions.iter().filter_map(|m| m.as_ref().sentiment_label()) {
        counts.record(label);
    }
    counts
}

/// Count mentions per source, keyed by the stored value and listed in the
/// order each source was first seen.
pub fn platform_summary<M: AsRef<Mention>>(mentions: &[M]) -> Vec<SourceCount> {
    let mut counts: Vec<SourceCount> = Vec::new();
    for mention in mentions {
        let source = &mention.as_ref().source;
        match counts.iter_mut().find(|c| &c.source == source) {
            Some(entry) => entry.count += 1,
            None => counts.push(SourceCount {
                source: source.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Sum engagement counters across mentions.
pub fn engagement_summary<M: AsRef<Mention>>(mentions: &[M]) -> EngagementTotals {
    let mut totals = EngagementTotals::default();
    for mention in mentions {
        let e = mention.as_ref().engagement;
        totals.likes = totals.likes.saturating_add(e.likes);
        totals.shares = totals.shares.saturating_add(e.shares);
        totals.comments = totals.comments.saturating_add(e.comments);
    }
    totals.total = totals
        .likes
        .saturating_add(totals.shares)
        .saturating_add(totals.comments);
    totals
}

/// Counts, percentages and averages for a mention set.
///
/// Percentages are over all mentions; averages are over classified mentions
/// only. Both fall back to `0.0` when their denominator is zero.
pub fn statistics<M: AsRef<Mention>>(mentions: &[M]) -> SentimentStatistics {
    let counts = sentiment_summary(mentions);
    let total = mentions.len();

    let (polarity_sum, subjectivity_sum) = mentions
        .iter()
        .filter_map(|m| m.as_ref().sentiment)
        .fold((0.0, 0.0), |(p, s), r| (p + r.polarity, s + r.subjectivity));
    let classified = counts.classified();

    SentimentStatistics {
        total,
        positive: counts.positive,
        negative: counts.negative,
        neutral: counts.neutral,
        positive_pct: percentage(counts.positive, total),
        negative_pct: percentage(counts.negative, total),
        neutral_pct: percentage(counts.neutral, total),
        avg_polarity: ratio(polarity_sum, classified),
        avg_subjectivity: ratio(subjectivity_sum, classified),
    }
}

/// Mentions whose label equals `label`.
pub fn filter_by_sentiment<M: AsRef<Mention>>(mentions: &[M], label: SentimentLabel) -> Vec<&M> {
    mentions
        .iter()
        .filter(|m| m.as_ref().sentiment_label() == Some(label))
        .collect()
}

/// Mentions from `platform`, compared without regard to case.
pub fn filter_by_platform<'a, M: AsRef<Mention>>(mentions: &'a [M], platform: &str) -> Vec<&'a M> {
    mentions
        .iter()
        .filter(|m| m.as_ref().is_from(platform))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
