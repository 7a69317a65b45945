//! # psichat Core Library
//!
//! Emotional state for simulated chat characters, loosely based on Dörner's
//! Psi theory.
//!
//! Every [`Character`] owns a [`PsiModel`]:
//!
//! - **Affect parameters** — valence, arousal, selection threshold,
//!   resolution level, goal directedness, securing rate (all in [0, 1])
//! - **Emotion** — one of Neutral, Anger, Sadness, Joy, Bliss, Confusion,
//!   always derived from the parameters
//! - **History** — an append-only log of `(emotion, parameters)` snapshots
//!
//! plus a [`ConversationLog`] of past exchanges that supports substring
//! recall.
//!
//! ## Flow
//!
//! ```text
//! user text ──► SentimentSource::score ──► AffectUpdater::update ──► new state
//!                                             │  CueDetector::detect
//!                                             │  classify
//!                                             └► InteractionHistory
//! ```
//!
//! Updates are synchronous, O(1) and never fail. The model defines no locking;
//! `&mut` access to a character is the serialization point.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod affect;
pub mod character;
pub mod config;
pub mod conversation;
pub mod error;
pub mod sentiment;
pub mod types;

pub use affect::{
    AffectState, AffectUpdater, Cue, CueDetector, HistoryEntry, InteractionHistory,
    ParamOverrides, PsiModel, classify,
};
pub use character::Character;
pub use config::PsiConfig;
pub use conversation::{ConversationLog, ConversationMemory};
pub use error::PsiError;
pub use sentiment::{KeywordSentiment, SentimentSource};
pub use types::*;
