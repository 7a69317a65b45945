//! # psichat-session — chat controller for psichat
//!
//! Connects a [`psichat_core::Character`] to the two collaborators the core
//! treats as opaque: a sentiment source and a response source (normally a
//! hosted language model).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               ChatSession                │
//! │  ┌──────────────┐   ┌─────────────────┐  │
//! │  │  Responder   │   │ SentimentSource │  │
//! │  └──────┬───────┘   └────────┬────────┘  │
//! │         ▼                    ▼           │
//! │    ┌──────────────────────────────┐      │
//! │    │        psichat-core          │      │
//! │    │  Character · PsiModel · Log  │      │
//! │    └──────────────────────────────┘      │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `responder` — the response-source contract and a scripted fallback
//! - `session` — per-turn orchestration
//! - `error` — session errors

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]

pub mod error;
pub mod responder;
pub mod session;

pub use error::SessionError;
pub use responder::{ResponseContext, Responder, ScriptedResponder};
pub use session::{ChatSession, TurnOutcome};
