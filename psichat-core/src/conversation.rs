//! Conversation memory — what was said, and how the character felt saying it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AffectParams, Emotion};

/// One user message and the character's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMemory {
    /// What the user said.
    pub user_input: String,
    /// What the character answered.
    pub response: String,
    /// Emotion the character was in while answering.
    pub emotion: Emotion,
    /// Parameter vector while answering.
    pub params: AffectParams,
    /// Wall-clock time the exchange was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl ConversationMemory {
    /// Create a memory stamped with the current time.
    #[must_use]
    pub fn new(
        user_input: impl Into<String>,
        response: impl Into<String>,
        emotion: Emotion,
        params: AffectParams,
    ) -> Self {
        Self {
            user_input: user_input.into(),
            response: response.into(),
            emotion,
            params,
            recorded_at: Utc::now(),
        }
    }

    /// Whether the lowercased `needle` occurs in either side of the exchange.
    fn mentions(&self, needle: &str) -> bool {
        self.user_input.to_lowercase().contains(needle)
            || self.response.to_lowercase().contains(needle)
    }
}

/// Append-only transcript of a character's exchanges, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    memories: Vec<ConversationMemory>,
}

impl ConversationLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exchange.
    pub fn push(&mut self, memory: ConversationMemory) {
        self.memories.push(memory);
    }

    /// Number of stored exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memories.len()
    }

    /// Whether nothing has been said yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    /// Oldest-first iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, ConversationMemory> {
        self.memories.iter()
    }

    /// Most recent exchange.
    #[must_use]
    pub fn latest(&self) -> Option<&ConversationMemory> {
        self.memories.last()
    }

    /// Every exchange whose user input or response contains `query`,
    /// ignoring case, in chronological order.
    ///
    /// The query is matched as given, surrounding whitespace included. A blank
    /// query matches nothing.
    #[must_use]
    pub fn recall(&self, query: &str) -> Vec<&ConversationMemory> {
        self.recall_limited(query, usize::MAX)
    }

    /// Like [`ConversationLog::recall`], keeping at most `limit` results
    /// (the oldest matches).
    #[must_use]
    pub fn recall_limited(&self, query: &str, limit: usize) -> Vec<&ConversationMemory> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.memories
            .iter()
            .filter(|m| m.mentions(&needle))
            .take(limit)
            .collect()
    }

    /// Keep only the newest `keep` exchanges.
    pub fn retain_latest(&mut self, keep: usize) {
        let excess = self.memories.len().saturating_sub(keep);
        self.memories.drain(..excess);
    }
}
