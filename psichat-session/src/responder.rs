//! Response sources — who writes the character's side of the conversation.
//!
//! In production this is a hosted language model; the session only needs the
//! [`Responder`] contract. [`ScriptedResponder`] is the rule-based fallback:
//! always available, no network, one template per emotion.

use psichat_core::Emotion;

use crate::error::SessionError;

/// Everything a response source may use to stay in character.
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    /// Character name.
    pub name: &'a str,
    /// Character description.
    pub description: &'a str,
    /// Personality traits.
    pub traits: &'a [String],
    /// Emotion the character is in right now.
    pub emotion: Emotion,
    /// The user's message.
    pub user_input: &'a str,
}

/// Produces the character's reply to one user message.
pub trait Responder {
    /// Generate a reply.
    ///
    /// # Errors
    /// Returns [`SessionError::Response`] if the source cannot answer.
    fn respond(&self, ctx: &ResponseContext<'_>) -> Result<String, SessionError>;
}

impl<F> Responder for F
where
    F: Fn(&ResponseContext<'_>) -> Result<String, SessionError>,
{
    fn respond(&self, ctx: &ResponseContext<'_>) -> Result<String, SessionError> {
        self(ctx)
    }
}

/// Template replies keyed on the current emotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedResponder;

impl Responder for ScriptedResponder {
    fn respond(&self, ctx: &ResponseContext<'_>) -> Result<String, SessionError> {
        let name = ctx.name;
        let text = match ctx.emotion {
            Emotion::Anger => "Enough! I will not stand for this.".to_string(),
            Emotion::Sadness => "...I would rather not talk much right now.".to_string(),
            Emotion::Joy => format!("Ha! {name} could not be happier to hear it!"),
            Emotion::Bliss => "All is calm. Tell me more, friend.".to_string(),
            Emotion::Confusion => "I... I am not sure what to make of that.".to_string(),
            Emotion::Neutral => match ctx.traits.first() {
                Some(t) => format!("{name}, ever {t}, considers your words."),
                None => format!("{name} considers your words."),
            },
        };
        Ok(text)
    }
}
