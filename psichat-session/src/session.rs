//! Chat session — one character, one conversation.
//!
//! Per turn:
//!
//! 1. ask the [`Responder`] for a reply in the character's current emotion
//! 2. store the exchange in the character's memory
//! 3. score the user's message with the [`SentimentSource`]
//! 4. apply it to the affect model
//!
//! A failed reply skips 2–4, leaving the character untouched.
//!
//! Between runs a session is persisted as the character's JSON, affect and
//! memory included.

use std::path::Path;

use psichat_core::{
    AffectUpdater, Character, ConversationMemory, Emotion, HistoryEntry, PsiConfig,
    SentimentSource,
};
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::responder::{ResponseContext, Responder};

/// Result of one completed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The character's reply.
    pub response: String,
    /// Emotion the reply was written in.
    pub emotion_before: Emotion,
    /// State after the user's message was applied.
    pub entry: HistoryEntry,
}

/// Drives a conversation between the user and a single [`Character`].
///
/// Takes `&mut self` per turn, so turns on one session are strictly ordered.
#[derive(Debug)]
pub struct ChatSession<S, R> {
    character: Character,
    updater: AffectUpdater,
    sentiment: S,
    responder: R,
    recall_limit: usize,
}

impl<S: SentimentSource, R: Responder> ChatSession<S, R> {
    /// Start a session for `character`.
    #[must_use]
    pub fn new(character: Character, config: &PsiConfig, sentiment: S, responder: R) -> Self {
        Self {
            character,
            updater: AffectUpdater::new(config),
            sentiment,
            responder,
            recall_limit: config.memory.recall_limit,
        }
    }

    /// The character being talked to.
    #[must_use]
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// End the session, handing the character back for persistence.
    #[must_use]
    pub fn into_character(self) -> Character {
        self.character
    }

    /// Run one turn.
    ///
    /// # Errors
    /// [`SessionError::EmptyInput`] for a blank message; the responder's error
    /// if it fails. Either way the character is unchanged.
    pub fn turn(&mut self, user_input: &str) -> Result<TurnOutcome, SessionError> {
        let user_input = user_input.trim();
        if user_input.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let emotion_before = self.character.emotion();
        let ctx = ResponseContext {
            name: &self.character.name,
            description: &self.character.description,
            traits: &self.character.traits,
            emotion: emotion_before,
            user_input,
        };
        let response = self.responder.respond(&ctx).inspect_err(|e| {
            warn!(character = %self.character.name, error = %e, "Responder failed, turn dropped");
        })?;

        let entry = self.character.record_exchange(
            &self.updater,
            user_input,
            &response,
            &self.sentiment,
        );
        debug!(
            character = %self.character.name,
            before = %emotion_before,
            after = %entry.emotion,
            "Turn complete"
        );

        Ok(TurnOutcome {
            response,
            emotion_before,
            entry,
        })
    }

    /// Resume a session from a character written by [`ChatSession::save`].
    ///
    /// # Errors
    /// [`SessionError::Io`] if the file cannot be read, [`SessionError::Core`]
    /// if it does not hold a valid character.
    pub fn load(
        path: &Path,
        config: &PsiConfig,
        sentiment: S,
        responder: R,
    ) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path)?;
        let character = Character::from_json(&json)?;
        debug!(
            character = %character.name,
            turns = character.history().len(),
            path = %path.display(),
            "Session resumed"
        );
        Ok(Self::new(character, config, sentiment, responder))
    }

    /// Write the character, affect and memory included, to `path` as JSON.
    ///
    /// # Errors
    /// [`SessionError::Core`] if encoding fails, [`SessionError::Io`] if the
    /// file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let json = self.character.to_json()?;
        std::fs::write(path, json)?;
        debug!(character = %self.character.name, path = %path.display(), "Session saved");
        Ok(())
    }

    /// Past exchanges mentioning `query`, capped at the configured limit.
    #[must_use]
    pub fn recall(&self, query: &str) -> Vec<&ConversationMemory> {
        self.character.recall(query, self.recall_limit)
    }
}
