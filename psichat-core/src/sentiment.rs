//! Sentiment sources — signed scores for user messages.
//!
//! The affect model only consumes a score in roughly [-1, 1]; where it comes
//! from is up to the caller. [`KeywordSentiment`] is the built-in fallback.

use crate::config::SentimentConfig;

/// Anything that can score the emotional polarity of a message.
///
/// The sign is polarity and the magnitude is intensity.
pub trait SentimentSource {
    /// Score `text`, ideally within [-1, 1].
    fn score(&self, text: &str) -> f64;
}

impl<F> SentimentSource for F
where
    F: Fn(&str) -> f64,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Keyword heuristic: a positive word gives `+magnitude`, otherwise a negative
/// word gives `-magnitude`, otherwise `baseline`.
#[derive(Debug, Clone)]
pub struct KeywordSentiment {
    baseline: f64,
    magnitude: f64,
    positive: Vec<String>,
    negative: Vec<String>,
}

impl KeywordSentiment {
    /// Build a scorer from configuration.
    #[must_use]
    pub fn new(config: &SentimentConfig) -> Self {
        let lower = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            baseline: config.baseline,
            magnitude: config.magnitude.abs(),
            positive: lower(&config.positive),
            negative: lower(&config.negative),
        }
    }
}

impl Default for KeywordSentiment {
    fn default() -> Self {
        Self::new(&SentimentConfig::default())
    }
}

impl SentimentSource for KeywordSentiment {
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        if self.positive.iter().any(|w| lowered.contains(w.as_str())) {
            self.magnitude
        } else if self.negative.iter().any(|w| lowered.contains(w.as_str())) {
            -self.magnitude
        } else {
            self.baseline
        }
    }
}
