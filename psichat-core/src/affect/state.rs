//! Affect state — the parameter vector plus its derived emotion label.

use serde::{Deserialize, Serialize};

use crate::affect::classify::classify;
use crate::affect::history::InteractionHistory;
use crate::types::{AffectParams, Emotion};

/// A character's current affect: six clamped parameters and the label the
/// classifier assigns them.
///
/// The label is recomputed whenever the parameters change and cannot be set
/// on its own. Deserialization re-clamps and reclassifies, so a stored label
/// is never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredAffectState")]
pub struct AffectState {
    params: AffectParams,
    emotion: Emotion,
}

#[derive(Deserialize)]
struct StoredAffectState {
    params: AffectParams,
}

impl From<StoredAffectState> for AffectState {
    fn from(stored: StoredAffectState) -> Self {
        Self::from_params(stored.params)
    }
}

impl AffectState {
    /// Build a state from raw parameters, clamping them and classifying.
    #[must_use]
    pub fn from_params(params: AffectParams) -> Self {
        let params = params.clamped();
        Self {
            params,
            emotion: classify(&params),
        }
    }

    /// The parameter vector.
    #[must_use]
    pub fn params(&self) -> &AffectParams {
        &self.params
    }

    /// The derived emotion label.
    #[must_use]
    pub fn emotion(&self) -> Emotion {
        self.emotion
    }
}

impl Default for AffectState {
    fn default() -> Self {
        Self::from_params(AffectParams::BASELINE)
    }
}

/// One character's emotional model: current state and the log of how it got
/// there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PsiModel {
    pub(crate) state: AffectState,
    pub(crate) history: InteractionHistory,
}

impl PsiModel {
    /// Start a model at `params` with an empty history.
    #[must_use]
    pub fn new(params: AffectParams) -> Self {
        Self {
            state: AffectState::from_params(params),
            history: InteractionHistory::new(),
        }
    }

    /// Current affect state.
    #[must_use]
    pub fn state(&self) -> &AffectState {
        &self.state
    }

    /// Current emotion label.
    #[must_use]
    pub fn emotion(&self) -> Emotion {
        self.state.emotion
    }

    /// Current parameter vector.
    #[must_use]
    pub fn params(&self) -> &AffectParams {
        &self.state.params
    }

    /// Past interactions, oldest first.
    #[must_use]
    pub fn history(&self) -> &InteractionHistory {
        &self.history
    }

    /// Drop all but the newest `keep` history entries.
    pub fn truncate_history(&mut self, keep: usize) {
        self.history.retain_latest(keep);
    }
}
