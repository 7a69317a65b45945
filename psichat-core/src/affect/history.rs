//! Interaction history — append-only log of classified states.

use serde::{Deserialize, Serialize};

use crate::affect::classify::classify;
use crate::types::{AffectParams, Emotion};

/// Snapshot taken after one interaction was applied.
///
/// Like [`crate::affect::AffectState`], a loaded entry is re-clamped and
/// reclassified; the stored label is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistoryEntry")]
pub struct HistoryEntry {
    /// Label the classifier produced for `params`.
    pub emotion: Emotion,
    /// Full parameter vector at that moment.
    pub params: AffectParams,
}

#[derive(Deserialize)]
struct StoredHistoryEntry {
    params: AffectParams,
}

impl From<StoredHistoryEntry> for HistoryEntry {
    fn from(stored: StoredHistoryEntry) -> Self {
        let params = stored.params.clamped();
        Self {
            emotion: classify(&params),
            params,
        }
    }
}

/// Chronological log of [`HistoryEntry`] values for one character.
///
/// Only the affect updater appends. Callers get read-only access and may drop
/// old entries with [`InteractionHistory::retain_latest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionHistory {
    entries: Vec<HistoryEntry>,
}

impl InteractionHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Number of recorded interactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest-first iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// How many entries carry `emotion`.
    #[must_use]
    pub fn count(&self, emotion: Emotion) -> usize {
        self.entries.iter().filter(|e| e.emotion == emotion).count()
    }

    /// Keep only the newest `keep` entries.
    pub fn retain_latest(&mut self, keep: usize) {
        let excess = self.entries.len().saturating_sub(keep);
        self.entries.drain(..excess);
    }
}

impl<'a> IntoIterator for &'a InteractionHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
