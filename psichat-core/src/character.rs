//! Characters — a name, a personality, an emotional model and a memory.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::affect::{
    AffectUpdater, HistoryEntry, InteractionHistory, ParamOverrides, PsiModel, initial_params,
};
use crate::config::PsiConfig;
use crate::conversation::{ConversationLog, ConversationMemory};
use crate::error::Result;
use crate::sentiment::SentimentSource;
use crate::types::{AffectParams, CharacterId, Emotion};

/// Name used when the trait provider supplies none.
pub const UNNAMED: &str = "Unnamed";
/// Description used when the trait provider supplies none.
pub const NO_DESCRIPTION: &str = "No description";

/// A simulated character the user can talk to.
///
/// Owns exactly one [`PsiModel`] and one [`ConversationLog`]. Updates take
/// `&mut self`, so at most one interaction can be in flight per character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Role and key features.
    pub description: String,
    /// Free-text personality traits.
    pub traits: Vec<String>,
    psi: PsiModel,
    memory: ConversationLog,
}

impl Character {
    /// Create a character whose affect is seeded from `traits`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        traits: Vec<String>,
        config: &PsiConfig,
    ) -> Self {
        Self::with_overrides(name, description, traits, config, None)
    }

    /// Create a character, letting `overrides` take precedence over both the
    /// baseline and the trait-derived values.
    #[must_use]
    pub fn with_overrides(
        name: impl Into<String>,
        description: impl Into<String>,
        traits: Vec<String>,
        config: &PsiConfig,
        overrides: Option<&ParamOverrides>,
    ) -> Self {
        let name = non_blank(name.into(), UNNAMED);
        let description = non_blank(description.into(), NO_DESCRIPTION);
        let params = initial_params(config.affect.baseline, traits.as_slice(), overrides);

        debug!(%name, traits = traits.len(), %params, "Created character");

        Self {
            id: CharacterId::new(),
            name,
            description,
            traits,
            psi: PsiModel::new(params),
            memory: ConversationLog::new(),
        }
    }

    /// The emotional model.
    #[must_use]
    pub fn psi(&self) -> &PsiModel {
        &self.psi
    }

    /// Current emotion label, for display.
    #[must_use]
    pub fn emotion(&self) -> Emotion {
        self.psi.emotion()
    }

    /// Current parameter vector, for debugging and visualization.
    #[must_use]
    pub fn params(&self) -> &AffectParams {
        self.psi.params()
    }

    /// Classified states after each interaction.
    #[must_use]
    pub fn history(&self) -> &InteractionHistory {
        self.psi.history()
    }

    /// Past exchanges.
    #[must_use]
    pub fn memory(&self) -> &ConversationLog {
        &self.memory
    }

    /// Apply one interaction with an already-computed sentiment score.
    pub fn interact(&mut self, updater: &AffectUpdater, text: &str, sentiment: f64) -> HistoryEntry {
        updater.update(&mut self.psi, text, sentiment)
    }

    /// Record a complete turn.
    ///
    /// The exchange is stored with the emotion the reply was produced in, then
    /// the user input is scored and applied to the affect state.
    pub fn record_exchange<S: SentimentSource + ?Sized>(
        &mut self,
        updater: &AffectUpdater,
        user_input: &str,
        response: &str,
        sentiment: &S,
    ) -> HistoryEntry {
        self.memory.push(ConversationMemory::new(
            user_input,
            response,
            self.psi.emotion(),
            *self.psi.params(),
        ));
        let score = sentiment.score(user_input);
        self.interact(updater, user_input, score)
    }

    /// Exchanges mentioning `query`, oldest first, at most `limit`.
    #[must_use]
    pub fn recall(&self, query: &str, limit: usize) -> Vec<&ConversationMemory> {
        self.memory.recall_limited(query, limit)
    }

    /// Serialize the whole character, including affect and memory, to JSON.
    ///
    /// # Errors
    /// Returns `PsiError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a character saved with [`Character::to_json`].
    ///
    /// The affect label is recomputed from the stored parameters.
    ///
    /// # Errors
    /// Returns `PsiError::Serialization` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Keep only the newest `keep` history entries and exchanges.
    pub fn truncate_history(&mut self, keep: usize) {
        self.psi.truncate_history(keep);
        self.memory.retain_latest(keep);
    }
}

fn non_blank(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
