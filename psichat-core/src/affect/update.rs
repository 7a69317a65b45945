//! Affect update — applies one interaction to a character's state.
//!
//! Per interaction, in order, clamping to [0, 1] after every write:
//!
//! 1. `valence += sentiment × gain`
//! 2. `arousal += |sentiment| × gain` (intensity, not polarity, activates)
//! 3. at most one cue branch:
//!    - anger: selection +0.15, resolution −0.1, arousal +0.2
//!    - sadness: arousal −0.15, goal directedness −0.1
//!    - joy: valence +0.15, arousal +0.1, securing rate −0.05
//! 4. reclassify
//! 5. append `(emotion, params)` to the history

use tracing::{debug, info, warn};

use crate::affect::cue::{Cue, CueDetector};
use crate::affect::history::HistoryEntry;
use crate::affect::state::{AffectState, PsiModel};
use crate::config::PsiConfig;
use crate::types::{AffectParams, clamp_unit};

const ANGER_SELECTION_DELTA: f64 = 0.15;
const ANGER_RESOLUTION_DELTA: f64 = -0.1;
const ANGER_AROUSAL_DELTA: f64 = 0.2;
const SADNESS_AROUSAL_DELTA: f64 = -0.15;
const SADNESS_GOAL_DELTA: f64 = -0.1;
const JOY_VALENCE_DELTA: f64 = 0.15;
const JOY_AROUSAL_DELTA: f64 = 0.1;
const JOY_SECURING_DELTA: f64 = -0.05;

/// Bring an externally supplied sentiment score into [-1, 1].
///
/// Non-finite scores become 0.0. Both cases are logged, since they indicate a
/// misbehaving sentiment source.
#[must_use]
pub fn sanitize_sentiment(sentiment: f64) -> f64 {
    if !sentiment.is_finite() {
        warn!(sentiment, "Non-finite sentiment score, treating as 0.0");
        return 0.0;
    }
    if !(-1.0..=1.0).contains(&sentiment) {
        warn!(sentiment, "Sentiment score outside [-1, 1], clamping");
    }
    sentiment.clamp(-1.0, 1.0)
}

/// Applies interactions to affect states. Holds no per-character data, so one
/// updater can serve every character.
#[derive(Debug, Clone)]
pub struct AffectUpdater {
    cues: CueDetector,
    sentiment_gain: f64,
}

impl AffectUpdater {
    /// Build an updater from configuration.
    #[must_use]
    pub fn new(config: &PsiConfig) -> Self {
        Self {
            cues: CueDetector::new(&config.cues),
            sentiment_gain: config.affect.sentiment_gain,
        }
    }

    /// The cue detector used for step 3.
    #[must_use]
    pub fn cues(&self) -> &CueDetector {
        &self.cues
    }

    /// Steps 1–3 on a bare parameter vector. Returns the new vector and the
    /// cue that fired.
    #[must_use]
    pub fn apply(&self, params: &AffectParams, text: &str, sentiment: f64) -> (AffectParams, Cue) {
        let sentiment = sanitize_sentiment(sentiment);
        let mut p = params.clamped();

        p.valence = clamp_unit(p.valence + sentiment * self.sentiment_gain);
        p.arousal = clamp_unit(p.arousal + sentiment.abs() * self.sentiment_gain);

        let cue = self.cues.detect(text);
        match cue {
            Cue::Anger => {
                p.selection_threshold = clamp_unit(p.selection_threshold + ANGER_SELECTION_DELTA);
                p.resolution_level = clamp_unit(p.resolution_level + ANGER_RESOLUTION_DELTA);
                p.arousal = clamp_unit(p.arousal + ANGER_AROUSAL_DELTA);
            }
            Cue::Sadness => {
                p.arousal = clamp_unit(p.arousal + SADNESS_AROUSAL_DELTA);
                p.goal_directedness = clamp_unit(p.goal_directedness + SADNESS_GOAL_DELTA);
            }
            Cue::Joy => {
                p.valence = clamp_unit(p.valence + JOY_VALENCE_DELTA);
                p.arousal = clamp_unit(p.arousal + JOY_AROUSAL_DELTA);
                p.securing_rate = clamp_unit(p.securing_rate + JOY_SECURING_DELTA);
            }
            Cue::None => {}
        }

        (p, cue)
    }

    /// Steps 1–4: the state that follows `state` after this interaction.
    #[must_use]
    pub fn next_state(&self, state: &AffectState, text: &str, sentiment: f64) -> AffectState {
        let (params, _) = self.apply(state.params(), text, sentiment);
        AffectState::from_params(params)
    }

    /// Full update: advance `model` and append to its history.
    ///
    /// The new state is computed completely before it replaces the old one.
    /// Returns the appended entry.
    pub fn update(&self, model: &mut PsiModel, text: &str, sentiment: f64) -> HistoryEntry {
        let previous = model.state.emotion();
        let (params, cue) = self.apply(model.state.params(), text, sentiment);
        let next = AffectState::from_params(params);

        let entry = HistoryEntry {
            emotion: next.emotion(),
            params: *next.params(),
        };
        model.state = next;
        model.history.push(entry);

        debug!(
            ?cue,
            sentiment,
            emotion = %entry.emotion,
            params = %entry.params,
            history_len = model.history.len(),
            "Applied interaction"
        );
        if previous != entry.emotion {
            info!(from = %previous, to = %entry.emotion, "Emotion changed");
        }

        entry
    }
}

impl Default for AffectUpdater {
    fn default() -> Self {
        Self::new(&PsiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Emotion;

    fn model() -> PsiModel {
        PsiModel::new(AffectParams::BASELINE)
    }

    #[test]
    fn angry_message_scenario() {
        let updater = AffectUpdater::default();
        let mut m = model();
        let entry = updater.update(&mut m, "I am so angry and mad at you", -0.5);

        let p = m.params();
        assert_eq!(p.valence, 0.45);
        assert_eq!(p.arousal, 0.75);
        assert_eq!(p.selection_threshold, 0.65);
        assert_eq!(p.resolution_level, 0.6);
        assert_eq!(p.goal_directedness, 0.6);
        assert_eq!(p.securing_rate, 0.4);

        // v=0.45 is not below 0.3, a=0.75 is not below 0.4, selection=0.65
        // is not below 0.3: no rule fires.
        assert_eq!(entry.emotion, Emotion::Neutral);
        assert_eq!(m.emotion(), Emotion::Neutral);
        assert_eq!(m.history().len(), 1);
    }

    #[test]
    fn two_sad_turns_stop_on_the_sadness_bound() {
        let updater = AffectUpdater::default();
        let mut m = model();
        let first = updater.update(&mut m, "I feel sad", -0.5);
        // Arousal lands exactly on 0.4, which is not below it.
        assert_eq!(first.params.arousal, 0.4);
        assert_eq!(first.emotion, Emotion::Neutral);

        let second = updater.update(&mut m, "I feel sad", -0.5);
        // v = 0.5 - 0.05 - 0.05 must compare as 0.4, not below it.
        assert_eq!(second.params.valence, 0.4);
        assert!(second.params.arousal < 0.4);
        assert_eq!(second.emotion, Emotion::Neutral);
    }

    #[test]
    fn aggressive_character_stops_on_the_anger_bound() {
        let updater = AffectUpdater::default();
        let mut m = PsiModel::new(AffectParams {
            selection_threshold: 0.8,
            arousal: 0.7,
            ..AffectParams::BASELINE
        });
        let emotions: Vec<Emotion> = (0..5)
            .map(|_| updater.update(&mut m, "I hate the whale", -0.5).emotion)
            .collect();
        // After four turns valence sits at 0.3 (not below), so anger waits
        // for the fifth.
        assert!(m.history().as_slice()[3].params.valence >= 0.3);
        assert_eq!(
            emotions,
            vec![
                Emotion::Neutral,
                Emotion::Neutral,
                Emotion::Neutral,
                Emotion::Neutral,
                Emotion::Anger,
            ]
        );
    }

    #[test]
    fn negative_sentiment_still_raises_arousal() {
        let updater = AffectUpdater::default();
        let (p, cue) = updater.apply(&AffectParams::BASELINE, "the weather", -0.8);
        assert_eq!(cue, Cue::None);
        assert!(p.arousal > AffectParams::BASELINE.arousal);
        assert!(p.valence < AffectParams::BASELINE.valence);
    }

    #[test]
    fn anger_cue_overrides_joy_cue() {
        let updater = AffectUpdater::default();
        let (p, cue) = updater.apply(&AffectParams::BASELINE, "I hate that but I love you", 0.0);
        assert_eq!(cue, Cue::Anger);
        // Joy deltas untouched.
        assert_eq!(p.valence, 0.5);
        assert_eq!(p.securing_rate, 0.4);
        assert_eq!(p.selection_threshold, 0.65);
    }

    #[test]
    fn sadness_cue_lowers_arousal_and_goal() {
        let updater = AffectUpdater::default();
        let (p, _) = updater.apply(&AffectParams::BASELINE, "I feel so sad", 0.0);
        assert_eq!(p.arousal, 0.35);
        assert_eq!(p.goal_directedness, 0.5);
    }

    #[test]
    fn joy_cue_can_reach_joy() {
        let updater = AffectUpdater::default();
        let mut m = PsiModel::new(AffectParams {
            valence: 0.7,
            ..AffectParams::BASELINE
        });
        let entry = updater.update(&mut m, "I love this, I'm so happy", 0.5);
        // v = 0.7 + 0.05 + 0.15, a = 0.5 + 0.05 + 0.1
        assert_eq!(entry.params.valence, 0.9);
        assert_eq!(entry.params.arousal, 0.65);
        assert_eq!(entry.emotion, Emotion::Joy);
        assert!((entry.params.securing_rate - 0.35).abs() < 1e-12);
    }

    #[test]
    fn repeated_sadness_bottoms_out_at_zero() {
        let updater = AffectUpdater::default();
        let mut m = model();
        for _ in 0..20 {
            updater.update(&mut m, "so lonely", -1.0);
        }
        let p = m.params();
        assert_eq!(p.valence, 0.0);
        assert_eq!(p.goal_directedness, 0.0);
        assert!(p.is_in_range());
        assert_eq!(m.emotion(), Emotion::Sadness);
        assert_eq!(m.history().len(), 20);
    }

    #[test]
    fn repeated_anger_reaches_anger() {
        let updater = AffectUpdater::default();
        let mut m = model();
        for _ in 0..5 {
            updater.update(&mut m, "you annoy me", -1.0);
        }
        assert_eq!(m.emotion(), Emotion::Anger);
        assert_eq!(m.params().arousal, 1.0);
        assert_eq!(m.params().selection_threshold, 1.0);
    }

    #[test]
    fn sanitize_handles_bad_scores() {
        assert_eq!(sanitize_sentiment(f64::NAN), 0.0);
        assert_eq!(sanitize_sentiment(f64::INFINITY), 0.0);
        assert_eq!(sanitize_sentiment(3.0), 1.0);
        assert_eq!(sanitize_sentiment(-0.25), -0.25);
    }

    #[test]
    fn nan_sentiment_leaves_sentiment_steps_inert() {
        let updater = AffectUpdater::default();
        let (p, _) = updater.apply(&AffectParams::BASELINE, "hello", f64::NAN);
        assert_eq!(p, AffectParams::BASELINE);
    }

    #[test]
    fn next_state_is_pure() {
        let updater = AffectUpdater::default();
        let s = AffectState::default();
        let a = updater.next_state(&s, "so happy", 0.3);
        let b = updater.next_state(&s, "so happy", 0.3);
        assert_eq!(a, b);
        assert_eq!(s, AffectState::default());
    }
}
