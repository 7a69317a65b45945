//! Cue detection — keyword signals in raw user text.
//!
//! Three disjoint keyword sets are tested in fixed priority order
//! (anger, then sadness, then joy); the first set with any hit wins.

use serde::{Deserialize, Serialize};

use crate::config::CueConfig;

/// Emotional category suggested by the words in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// An anger keyword was found.
    Anger,
    /// A sadness keyword was found (and no anger keyword).
    Sadness,
    /// A joy keyword was found (and no anger or sadness keyword).
    Joy,
    /// Nothing matched.
    None,
}

/// Keyword-membership cue detector.
#[derive(Debug, Clone)]
pub struct CueDetector {
    anger: Vec<String>,
    sadness: Vec<String>,
    joy: Vec<String>,
}

impl CueDetector {
    /// Build a detector from configured keyword sets.
    ///
    /// Keywords are lowercased once here; blank entries are dropped so they
    /// cannot match every message.
    #[must_use]
    pub fn new(config: &CueConfig) -> Self {
        Self {
            anger: normalize(&config.anger),
            sadness: normalize(&config.sadness),
            joy: normalize(&config.joy),
        }
    }

    /// Classify `text` into a cue category. Case-insensitive substring match.
    #[must_use]
    pub fn detect(&self, text: &str) -> Cue {
        let lowered = text.to_lowercase();
        let hit = |words: &[String]| words.iter().any(|w| lowered.contains(w.as_str()));

        if hit(&self.anger) {
            Cue::Anger
        } else if hit(&self.sadness) {
            Cue::Sadness
        } else if hit(&self.joy) {
            Cue::Joy
        } else {
            Cue::None
        }
    }
}

impl Default for CueDetector {
    fn default() -> Self {
        Self::new(&CueConfig::default())
    }
}

fn normalize(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
