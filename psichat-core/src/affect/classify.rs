//! Emotion classification — parameter vector → discrete label.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! | # | Condition                                                   | Label     |
//! |---|-------------------------------------------------------------|-----------|
//! | 1 | valence < 0.3 ∧ arousal > 0.7 ∧ selection_threshold > 0.7   | Anger     |
//! | 2 | valence < 0.4 ∧ arousal < 0.4                               | Sadness   |
//! | 3 | valence > 0.7 ∧ arousal > 0.6                               | Joy       |
//! | 4 | valence > 0.7 ∧ arousal < 0.4                               | Bliss     |
//! | 5 | selection_threshold < 0.3 ∧ goal_directedness < 0.4         | Confusion |
//! | 6 | otherwise                                                   | Neutral   |
//!
//! With valence > 0.7 and 0.4 ≤ arousal ≤ 0.6 neither Joy nor Bliss fires.
//! That gap is part of the rule set and is kept as is.

use crate::types::{AffectParams, Emotion};

/// Classify a parameter vector. Total over every input, NaN included.
#[must_use]
pub fn classify(params: &AffectParams) -> Emotion {
    let AffectParams {
        valence,
        arousal,
        selection_threshold,
        goal_directedness,
        ..
    } = *params;

    if valence < 0.3 && arousal > 0.7 && selection_threshold > 0.7 {
        Emotion::Anger
    } else if valence < 0.4 && arousal < 0.4 {
        Emotion::Sadness
    } else if valence > 0.7 && arousal > 0.6 {
        Emotion::Joy
    } else if valence > 0.7 && arousal < 0.4 {
        Emotion::Bliss
    } else if selection_threshold < 0.3 && goal_directedness < 0.4 {
        Emotion::Confusion
    } else {
        Emotion::Neutral
    }
}
