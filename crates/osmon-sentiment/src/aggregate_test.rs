use chrono::Utc;
use osmon_core::{Engagement, RawRecord, SentimentResult};

use super::*;

fn mention(source: &str, polarity: Option<f64>, engagement: Engagement) -> Mention {
    let raw = RawRecord::new("some text", source, Utc::now()).with_engagement(engagement);
    let mut mention = Mention::from_raw(raw, &["text"]).unwrap();
    mention.sentiment = polarity.map(|p| SentimentResult::from_scores(p, 0.5));
    mention
}

fn classified(source: &str, polarity: f64) -> Mention {
    mention(source, Some(polarity), Engagement::default())
}

#[test]
fn three_polarities_give_one_of_each_label() {
    let mentions = vec![
        classified("twitter", 0.5),
        classified("twitter", -0.5),
        classified("reddit", 0.0),
    ];
    let counts = sentiment_summary(&mentions);
    assert_eq!(
        counts,
        SentimentCounts {
            positive: 1,
            negative: 1,
            neutral: 1
        }
    );

    let stats = statistics(&mentions);
    assert_eq!(stats.avg_polarity, 0.0);
    assert_eq!(stats.total, 3);
}

#[test]
fn unclassified_mentions_are_not_counted_as_neutral() {
    let mentions = vec![
        classified("web", 0.0),
        mention("web", None, Engagement::default()),
    ];
    let counts = sentiment_summary(&mentions);
    assert_eq!(counts.neutral, 1);
    assert_eq!(counts.classified(), 1);
}

#[test]
fn statistics_of_empty_set_is_all_zero() {
    let empty: Vec<Mention> = Vec::new();
    let stats = statistics(&empty);
    assert_eq!(stats, SentimentStatistics::default());
    assert_eq!(stats.positive_pct, 0.0);
    assert_eq!(stats.avg_subjectivity, 0.0);
}

#[test]
fn statistics_with_nothing_classified_has_zero_averages() {
    let mentions = vec![mention("web", None, Engagement::default())];
    let stats = statistics(&mentions);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.positive_pct, 0.0);
    assert_eq!(stats.neutral_pct, 0.0);
    assert_eq!(stats.avg_polarity, 0.0);
    assert_eq!(stats.avg_subjectivity, 0.0);
}

#[test]
fn percentages_use_total_count() {
    let mentions = vec![
        classified("web", 0.9),
        classified("web", 0.9),
        classified("web", -0.9),
        mention("web", None, Engagement::default()),
    ];
    let stats = statistics(&mentions);
    assert!((stats.positive_pct - 50.0).abs() < 1e-9);
    assert!((stats.negative_pct - 25.0).abs() < 1e-9);
    assert_eq!(stats.neutral_pct, 0.0);
    // averages only see the three classified mentions
    assert!((stats.avg_polarity - 0.3).abs() < 1e-9);
    assert!((stats.avg_subjectivity - 0.5).abs() < 1e-9);
}

#[test]
fn platform_summary_keeps_stored_case_and_first_seen_order() {
    let mentions = vec![
        classified("reddit", 0.0),
        classified("Twitter", 0.0),
        classified("twitter", 0.0),
        classified("reddit", 0.0),
    ];
    let summary = platform_summary(&mentions);
    let pairs: Vec<_> = summary
        .iter()
        .map(|c| (c.source.as_str(), c.count))
        .collect();
    assert_eq!(pairs, vec![("reddit", 2), ("Twitter", 1), ("twitter", 1)]);
}

#[test]
fn engagement_summary_sums_components() {
    let mentions = vec![
        mention("twitter", None, Engagement::new(10, 5, 2)),
        mention("reddit", None, Engagement::new(50, 0, 15)),
        mention("web", None, Engagement::default()),
    ];
    let totals = engagement_summary(&mentions);
    assert_eq!(totals.likes, 60);
    assert_eq!(totals.shares, 5);
    assert_eq!(totals.comments, 17);
    assert_eq!(totals.total, totals.likes + totals.shares + totals.comments);
}

#[test]
fn engagement_summary_of_empty_set_is_zero() {
    let empty: Vec<Mention> = Vec::new();
    assert_eq!(engagement_summary(&empty), EngagementTotals::default());
}

#[test]
fn filters_return_matching_mentions_without_mutating_input() {
    let mentions = vec![
        classified("Twitter", 0.8),
        classified("reddit", -0.8),
        classified("twitter", 0.8),
    ];
    let before = mentions.clone();

    let positive = filter_by_sentiment(&mentions, SentimentLabel::Positive);
    assert_eq!(positive.len(), 2);

    let twitter = filter_by_platform(&mentions, "TWITTER");
    assert_eq!(twitter.len(), 2);
    assert_eq!(twitter[0].source, "Twitter");

    assert!(filter_by_platform(&mentions, "web").is_empty());
    assert_eq!(mentions, before);
}

#[test]
fn statistics_serializes_with_flat_field_names() {
    let stats = statistics(&[classified("web", 0.5)]);
    let value = serde_json::to_value(stats).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["positive"], 1);
    assert_eq!(value["positive_pct"], 100.0);
}
