//! Polarity models: the text-analysis capability behind the classifier.

use osmon_core::text::clean_text;

use crate::error::SentimentError;

/// Raw output of a polarity model, before labelling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarity {
    /// Expected in `[-1.0, 1.0]`.
    pub polarity: f64,
    /// Expected in `[0.0, 1.0]`.
    pub subjectivity: f64,
}

/// A text-sentiment model the classifier can be built with.
///
/// Implementations may fail; the classifier absorbs the failure and falls
/// back to a neutral result.
pub trait PolarityModel {
    /// Analyze `text` and return its polarity and subjectivity.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Analysis`] when the text cannot be analyzed.
    fn analyze(&self, text: &str) -> Result<Polarity, SentimentError>;
}

/// General-purpose opinion lexicon.
///
/// Each entry is `(word, polarity, subjectivity)`. Keys are lowercase single
/// words.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive signals
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 1.0),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("impressed", 0.7, 0.8),
    ("impressive", 1.0, 1.0),
    ("innovative", 0.5, 0.6),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("popular", 0.6, 0.8),
    ("positive", 0.23, 0.55),
    ("recommend", 0.5, 0.6),
    ("reliable", 0.5, 0.5),
    ("success", 0.6, 0.6),
    ("useful", 0.3, 0.0),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    // Negative signals
    ("angry", -0.5, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("broken", -0.4, 0.4),
    ("dangerous", -0.6, 0.9),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("lawsuit", -0.5, 0.2),
    ("negative", -0.3, 0.4),
    ("outage", -0.5, 0.3),
    ("poor", -0.4, 0.6),
    ("problem", -0.3, 0.3),
    ("scam", -0.8, 0.7),
    ("slow", -0.3, 0.4),
    ("terrible", -1.0, 1.0),
    ("useless", -0.5, 0.2),
    ("worst", -1.0, 1.0),
];

/// Words that scale the next opinion word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.4),
    ("very", 1.3),
];

/// Words that flip and dampen the next opinion word.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "hardly", "isn't", "wasn't", "don't", "doesn't", "didn't", "can't",
    "won't", "aren't",
];

/// Polarity multiplier applied to a negated opinion word.
const NEGATION_FACTOR: f64 = -0.5;

/// Default cap on analyzed text length, in characters.
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Lexicon-based polarity model.
///
/// Polarity and subjectivity are the means over all opinion words found,
/// after intensifier and negation adjustments. Text with no opinion words
/// scores `0.0` on both axes.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    max_chars: usize,
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl LexiconModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to analyze texts longer than `max_chars`.
    #[must_use]
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl PolarityModel for LexiconModel {
    fn analyze(&self, text: &str) -> Result<Polarity, SentimentError> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(SentimentError::Analysis(format!(
                "text is {len} characters, limit is {}",
                self.max_chars
            )));
        }

        let tokens: Vec<String> = clean_text(text)
            .split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .trim_matches('\'')
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        for (idx, token) in tokens.iter().enumerate() {
            let Some(&(_, weight, subjectivity)) =
                LEXICON.iter().find(|(word, _, _)| word == token)
            else {
                continue;
            };

            let mut polarity = weight;
            let mut subjectivity = subjectivity;
            let mut look_back = idx;

            if let Some(factor) = idx
                .checked_sub(1)
                .and_then(|prev| intensifier(&tokens[prev]))
            {
                polarity *= factor;
                subjectivity *= factor;
                look_back -= 1;
            }

            if look_back
                .checked_sub(1)
                .is_some_and(|prev| NEGATIONS.contains(&tokens[prev].as_str()))
            {
                polarity *= NEGATION_FACTOR;
            }

            polarities.push(polarity.clamp(-1.0, 1.0));
            subjectivities.push(subjectivity.clamp(0.0, 1.0));
        }

        Ok(Polarity {
            polarity: mean(&polarities),
            subjectivity: mean(&subjectivities),
        })
    }
}

fn intensifier(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, factor)| factor)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    values.iter().sum::<f64>() / denom
}
