//! Core type definitions for the psichat affect model.
//!
//! All types are serializable; callers decide how (and whether) to persist them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Unique identifier for a simulated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Create a new random character ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Emotion Labels
// ---------------------------------------------------------------------------

/// Discrete emotion derived from the affect parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Emotion {
    /// No rule matched.
    #[default]
    Neutral,
    /// Aversive, highly activated, rigid selection.
    Anger,
    /// Aversive and calm.
    Sadness,
    /// Appetitive and activated.
    Joy,
    /// Appetitive and calm.
    Bliss,
    /// Flexible selection with little goal focus.
    Confusion,
}

impl Emotion {
    /// Every label, in classification-rule order with `Neutral` last.
    pub const ALL: [Self; 6] = [
        Self::Anger,
        Self::Sadness,
        Self::Joy,
        Self::Bliss,
        Self::Confusion,
        Self::Neutral,
    ];

    /// Display name of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Anger => "Anger",
            Self::Sadness => "Sadness",
            Self::Joy => "Joy",
            Self::Bliss => "Bliss",
            Self::Confusion => "Confusion",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Affect Parameters — Psi theory (Dörner)
// ---------------------------------------------------------------------------

/// Clamp a parameter to the unit interval. NaN collapses to 0.0.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The six continuous Psi parameters. Each ranges 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectParams {
    /// Aversive (0) → appetitive (1).
    pub valence: f64,
    /// Calm (0) → activated (1).
    pub arousal: f64,
    /// Flexible (0) → rigid (1) behavior selection.
    pub selection_threshold: f64,
    /// Broad (0) → detailed (1) processing.
    pub resolution_level: f64,
    /// Adaptive (0) → focused (1) orientation.
    pub goal_directedness: f64,
    /// Rare (0) → frequent (1) self-checking.
    pub securing_rate: f64,
}

impl AffectParams {
    /// The neutral starting point every character is seeded from.
    pub const BASELINE: Self = Self {
        valence: 0.5,
        arousal: 0.5,
        selection_threshold: 0.5,
        resolution_level: 0.7,
        goal_directedness: 0.6,
        securing_rate: 0.4,
    };

    /// Create a parameter vector, clamping every value to [0, 1].
    #[must_use]
    pub fn new(
        valence: f64,
        arousal: f64,
        selection_threshold: f64,
        resolution_level: f64,
        goal_directedness: f64,
        securing_rate: f64,
    ) -> Self {
        Self {
            valence,
            arousal,
            selection_threshold,
            resolution_level,
            goal_directedness,
            securing_rate,
        }
        .clamped()
    }

    /// Copy of `self` with every field forced into [0, 1].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            valence: clamp_unit(self.valence),
            arousal: clamp_unit(self.arousal),
            selection_threshold: clamp_unit(self.selection_threshold),
            resolution_level: clamp_unit(self.resolution_level),
            goal_directedness: clamp_unit(self.goal_directedness),
            securing_rate: clamp_unit(self.securing_rate),
        }
    }

    /// Whether every field already lies in [0, 1].
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        self.as_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// Fields in declaration order, for visualization and iteration.
    #[must_use]
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.valence,
            self.arousal,
            self.selection_threshold,
            self.resolution_level,
            self.goal_directedness,
            self.securing_rate,
        ]
    }

    /// `(name, value)` pairs in declaration order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("valence", self.valence),
            ("arousal", self.arousal),
            ("selection_threshold", self.selection_threshold),
            ("resolution_level", self.resolution_level),
            ("goal_directedness", self.goal_directedness),
            ("securing_rate", self.securing_rate),
        ]
    }
}

impl Default for AffectParams {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for AffectParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v={:.2} a={:.2} sel={:.2} res={:.2} goal={:.2} sec={:.2}",
            self.valence,
            self.arousal,
            self.selection_threshold,
            self.resolution_level,
            self.goal_directedness,
            self.securing_rate
        )
    }
}
