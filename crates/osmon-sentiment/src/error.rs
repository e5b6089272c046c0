use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("text analysis failed: {0}")]
    Analysis(String),

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("{platform} collector failed: {reason}")]
    Collector { platform: String, reason: String },
}
