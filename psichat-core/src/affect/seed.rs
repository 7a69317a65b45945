//! Initial affect parameters from a character's personality traits.
//!
//! Seeding order: baseline → trait overrides → explicit caller overrides.
//! Traits are consulted once, at creation; they never touch the state again.

use serde::{Deserialize, Serialize};

use crate::types::{AffectParams, clamp_unit};

/// Partial set of parameter values. `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamOverrides {
    /// Override for `valence`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence: Option<f64>,
    /// Override for `arousal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arousal: Option<f64>,
    /// Override for `selection_threshold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_threshold: Option<f64>,
    /// Override for `resolution_level`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_level: Option<f64>,
    /// Override for `goal_directedness`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_directedness: Option<f64>,
    /// Override for `securing_rate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub securing_rate: Option<f64>,
}

impl ParamOverrides {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: &Self) -> Self {
        Self {
            valence: other.valence.or(self.valence),
            arousal: other.arousal.or(self.arousal),
            selection_threshold: other.selection_threshold.or(self.selection_threshold),
            resolution_level: other.resolution_level.or(self.resolution_level),
            goal_directedness: other.goal_directedness.or(self.goal_directedness),
            securing_rate: other.securing_rate.or(self.securing_rate),
        }
    }

    /// Apply to `base`, clamping every written value into [0, 1].
    #[must_use]
    pub fn apply(&self, base: AffectParams) -> AffectParams {
        let pick = |over: Option<f64>, current: f64| over.map_or(current, clamp_unit);
        AffectParams {
            valence: pick(self.valence, base.valence),
            arousal: pick(self.arousal, base.arousal),
            selection_threshold: pick(self.selection_threshold, base.selection_threshold),
            resolution_level: pick(self.resolution_level, base.resolution_level),
            goal_directedness: pick(self.goal_directedness, base.goal_directedness),
            securing_rate: pick(self.securing_rate, base.securing_rate),
        }
    }
}

/// Map trait labels to parameter overrides.
///
/// - `aggressive` → selection_threshold 0.8, arousal 0.7
/// - `optimistic` → valence 0.7
/// - `detailed` → resolution_level 0.9
///
/// Matching is exact per trait after trimming, ignoring case. Unknown traits
/// are ignored.
#[must_use]
pub fn seed_from_traits<S: AsRef<str>>(traits: &[S]) -> ParamOverrides {
    let has = |name: &str| {
        traits
            .iter()
            .any(|t| t.as_ref().trim().eq_ignore_ascii_case(name))
    };

    let mut overrides = ParamOverrides::default();
    if has("aggressive") {
        overrides.selection_threshold = Some(0.8);
        overrides.arousal = Some(0.7);
    }
    if has("optimistic") {
        overrides.valence = Some(0.7);
    }
    if has("detailed") {
        overrides.resolution_level = Some(0.9);
    }
    overrides
}

/// Full seeding pipeline: `baseline`, then traits, then `explicit`.
#[must_use]
pub fn initial_params<S: AsRef<str>>(
    baseline: AffectParams,
    traits: &[S],
    explicit: Option<&ParamOverrides>,
) -> AffectParams {
    let mut overrides = seed_from_traits(traits);
    if let Some(explicit) = explicit {
        overrides = overrides.merge(explicit);
    }
    overrides.apply(baseline.clamped())
}
