//! Sentiment classification over a pluggable polarity model.

use osmon_core::{Mention, SentimentResult};

use crate::model::{LexiconModel, PolarityModel};

/// Labels text as positive, negative or neutral.
///
/// The underlying [`PolarityModel`] is chosen at construction. Model failures
/// never escape: they degrade to [`SentimentResult::neutral_fallback`].
pub struct SentimentClassifier {
    model: Box<dyn PolarityModel>,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(LexiconModel::default())
    }
}

impl std::fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClassifier").finish_non_exhaustive()
    }
}

impl SentimentClassifier {
    #[must_use]
    pub fn new(model: impl PolarityModel + 'static) -> Self {
        Self {
            model: Box::new(model),
        }
    }

    /// Classify a single text.
    #[must_use]
    pub fn classify(&self, text: &str) -> SentimentResult {
        match self.model.analyze(text) {
            Ok(p) => SentimentResult::from_scores(p.polarity, p.subjectivity),
            Err(e) => {
                tracing::debug!(error = %e, "sentiment analysis failed; using neutral fallback");
                SentimentResult::neutral_fallback()
            }
        }
    }

    /// Classify each mention's content, preserving order and length.
    ///
    /// Mentions with empty content pass through untouched. Whitespace-only
    /// content is still classified.
    #[must_use]
    pub fn analyze_batch(&self, mentions: Vec<Mention>) -> Vec<Mention> {
        mentions
            .into_iter()
            .map(|mut mention| {
                if !mention.content.is_empty() {
                    mention.sentiment = Some(self.classify(&mention.content));
                }
                mention
            })
            .collect()
    }
}
