//! Sentiment classification, collection and aggregation for osmon.
//!
//! Collectors turn tracked keywords into raw records, the ingestion pipeline
//! normalizes them into [`Mention`](osmon_core::Mention)s and classifies each
//! one with a lexicon polarity model, and the aggregator summarizes any mention
//! set by sentiment, source and engagement.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod sources;

pub use aggregate::{
    engagement_summary, filter_by_platform, filter_by_sentiment, platform_summary,
    sentiment_summary, statistics, EngagementTotals, SentimentStatistics, SourceCount,
};
pub use classifier::SentimentClassifier;
pub use error::SentimentError;
pub use model::{LexiconModel, Polarity, PolarityModel};
pub use pipeline::ingest;
pub use sources::{
    collect_from, collector_for, Collector, CollectorSettings, RedditCredentials,
    TwitterCredentials,
};
