//! The Psi-theory affect model.
//!
//! A character's affect is six continuous parameters loosely following
//! Dörner's Psi theory. Each interaction nudges them via the sentiment score
//! and keyword cues in the user's text, and a fixed rule table maps the result
//! to one of six emotion labels.

pub mod classify;
pub mod cue;
pub mod history;
pub mod seed;
pub mod state;
pub mod update;

pub use classify::classify;
pub use cue::{Cue, CueDetector};
pub use history::{HistoryEntry, InteractionHistory};
pub use seed::{ParamOverrides, initial_params, seed_from_traits};
pub use state::{AffectState, PsiModel};
pub use update::{AffectUpdater, sanitize_sentiment};
