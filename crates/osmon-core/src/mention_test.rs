use chrono::TimeZone;

use super::*;

fn observed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
}

fn tracked() -> Vec<String> {
    vec!["Rust".to_string(), "ai".to_string(), "tokio".to_string()]
}

#[test]
fn label_thresholds_are_exclusive() {
    assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
    assert_eq!(
        SentimentLabel::from_polarity(0.100_000_1),
        SentimentLabel::Positive
    );
    assert_eq!(
        SentimentLabel::from_polarity(-0.100_000_1),
        SentimentLabel::Negative
    );
    assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
}

#[test]
fn label_parses_case_insensitively() {
    assert_eq!(
        "Positive".parse::<SentimentLabel>().unwrap(),
        SentimentLabel::Positive
    );
    assert_eq!(
        " neutral ".parse::<SentimentLabel>().unwrap(),
        SentimentLabel::Neutral
    );
}

#[test]
fn label_rejects_unknown_values() {
    let err = "happy".parse::<SentimentLabel>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidSentiment(ref v) if v == "happy"));
}

#[test]
fn label_serializes_lowercase() {
    let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
    assert_eq!(json, "\"negative\"");
    assert!(serde_json::from_str::<SentimentLabel>("\"mixed\"").is_err());
}

#[test]
fn score_weights_polarity_and_objectivity() {
    let result = SentimentResult::from_scores(0.5, 0.4);
    assert_eq!(result.label, SentimentLabel::Positive);
    assert!((result.score - (0.5 * 0.7 + 0.6 * 0.3)).abs() < 1e-12);
}

#[test]
fn from_scores_clamps_out_of_range_input() {
    let result = SentimentResult::from_scores(3.0, -2.0);
    assert_eq!(result.polarity, 1.0);
    assert_eq!(result.subjectivity, 0.0);

    let nan = SentimentResult::from_scores(f64::NAN, f64::NAN);
    assert_eq!(nan.polarity, 0.0);
    assert_eq!(nan.label, SentimentLabel::Neutral);
}

#[test]
fn neutral_fallback_is_all_zero() {
    let result = SentimentResult::neutral_fallback();
    assert_eq!(result.label, SentimentLabel::Neutral);
    assert_eq!(result.polarity, 0.0);
    assert_eq!(result.subjectivity, 0.0);
    assert_eq!(result.score, 0.0);
}

#[test]
fn engagement_total_is_sum_of_components() {
    let engagement = Engagement::new(10, 5, 2);
    assert_eq!(engagement.total(), 17);
}

#[test]
fn engagement_serializes_with_derived_total() {
    let value = serde_json::to_value(Engagement::new(1, 2, 3)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"likes": 1, "shares": 2, "comments": 3, "total": 6})
    );
}

#[test]
fn engagement_ignores_supplied_total_and_defaults_missing_keys() {
    let engagement: Engagement =
        serde_json::from_str(r#"{"likes": 4, "total": 999}"#).unwrap();
    assert_eq!(engagement, Engagement::new(4, 0, 0));
    assert_eq!(engagement.total(), 4);
}

#[test]
fn match_keywords_is_case_insensitive_and_ordered_by_tracked_list() {
    let found = match_keywords("Tokio makes RUST async; also AI", &tracked());
    assert_eq!(found, vec!["Rust", "ai", "tokio"]);
}

#[test]
fn match_keywords_uses_substring_semantics() {
    // "ai" is a substring of "said"
    let found = match_keywords("she said hello", &tracked());
    assert_eq!(found, vec!["ai"]);
}

#[test]
fn match_keywords_removes_duplicates_and_blanks() {
    let tracked = ["ai", "AI", "", "  "];
    let found = match_keywords("AI everywhere", &tracked);
    assert_eq!(found, vec!["ai"]);
}

#[test]
fn from_raw_computes_keywords_and_leaves_sentiment_unset() {
    let raw = RawRecord::new("Learning Rust today", "Twitter", observed_at())
        .with_author("@user1")
        .with_url("https://twitter.com/user1/status/1")
        .with_engagement(Engagement::new(3, 1, 0))
        .with_metadata("verified", true);

    let mention = Mention::from_raw(raw, &tracked()).unwrap();
    assert_eq!(mention.source, "Twitter");
    assert_eq!(mention.content, "Learning Rust today");
    assert_eq!(mention.keywords, vec!["Rust"]);
    assert!(mention.sentiment.is_none());
    assert_eq!(mention.engagement.total(), 4);
    assert_eq!(mention.metadata["verified"], serde_json::json!(true));
}

#[test]
fn from_raw_rejects_blank_text() {
    let raw = RawRecord::new("   ", "news", observed_at());
    let err = Mention::from_raw(raw, &tracked()).unwrap_err();
    assert!(matches!(err, CoreError::EmptyContent { ref platform } if platform == "news"));
}

#[test]
fn is_from_ignores_case_but_source_keeps_it() {
    let raw = RawRecord::new("rust", "Reddit", observed_at());
    let mention = Mention::from_raw(raw, &tracked()).unwrap();
    assert!(mention.is_from("reddit"));
    assert!(mention.is_from("REDDIT"));
    assert_eq!(mention.source, "Reddit");
}

#[test]
fn has_keyword_is_exact_membership() {
    let raw = RawRecord::new("rust and ai", "web", observed_at());
    let mention = Mention::from_raw(raw, &tracked()).unwrap();
    assert!(mention.has_keyword("Rust"));
    assert!(!mention.has_keyword("rust"));
    assert!(!mention.has_keyword("ru"));
}

#[test]
fn exported_shape_is_flat_with_iso_timestamp() {
    let raw = RawRecord::new("ai news", "news", observed_at()).with_url("https://example.com");
    let mut mention = Mention::from_raw(raw, &tracked()).unwrap();
    mention.sentiment = Some(SentimentResult::from_scores(0.0, 0.0));

    let value = serde_json::to_value(&mention).unwrap();
    assert_eq!(value["source"], "news");
    assert_eq!(value["timestamp"], "2024-05-01T12:30:00Z");
    assert_eq!(value["engagement"]["total"], 0);
    assert_eq!(value["sentiment"]["label"], "neutral");
    assert_eq!(value["keywords"], serde_json::json!(["ai"]));

    let back: Mention = serde_json::from_value(value).unwrap();
    assert_eq!(back, mention);
}

#[test]
fn deserializes_platform_alias() {
    let json = r#"{"platform": "Web", "content": "hi", "timestamp": "2024-05-01T12:30:00Z"}"#;
    let mention: Mention = serde_json::from_str(json).unwrap();
    assert_eq!(mention.source, "Web");
    assert!(mention.keywords.is_empty());
    assert_eq!(mention.engagement, Engagement::default());
}
