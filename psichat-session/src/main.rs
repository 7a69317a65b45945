//! `psichat` — talk to a single character from the terminal.
//!
//! ```text
//! psichat --name Ahab --description "Captain of the Pequod" --trait aggressive
//! ```
//!
//! Commands: `/state`, `/history`, `/recall <query>`, `/quit`.
//!
//! With `--state <file>` the character is resumed from that file when it
//! exists and written back on exit.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use psichat_core::{Character, KeywordSentiment, PsiConfig};
use psichat_session::{ChatSession, Responder, ScriptedResponder, SessionError};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Chat with a character whose mood follows the conversation.
#[derive(Debug, Parser)]
#[command(name = "psichat", version, about)]
struct Args {
    /// Path to a psichat.toml configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Character name.
    #[arg(short, long, default_value = "Unnamed")]
    name: String,

    /// Character description.
    #[arg(short, long, default_value = "")]
    description: String,

    /// Personality trait (repeatable).
    #[arg(short = 't', long = "trait")]
    traits: Vec<String>,

    /// Character state file to resume from and save to.
    #[arg(short, long)]
    state: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PsiConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PsiConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let sentiment = KeywordSentiment::new(&config.sentiment);
    let mut session = match &args.state {
        Some(path) if path.exists() => {
            ChatSession::load(path, &config, sentiment, ScriptedResponder)
                .with_context(|| format!("resuming from {}", path.display()))?
        }
        _ => {
            let character = Character::new(args.name, args.description, args.traits, &config);
            ChatSession::new(character, &config, sentiment, ScriptedResponder)
        }
    };
    info!(
        character = %session.character().name,
        id = %session.character().id,
        "Session started"
    );

    repl(&mut session)?;

    if let Some(path) = &args.state {
        session
            .save(path)
            .with_context(|| format!("saving to {}", path.display()))?;
    }

    let character = session.into_character();
    info!(
        character = %character.name,
        turns = character.history().len(),
        final_emotion = %character.emotion(),
        "Session ended"
    );
    Ok(())
}

fn repl<R: Responder>(
    session: &mut ChatSession<KeywordSentiment, R>,
) -> Result<(), SessionError> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "Talking to {}. Type /quit to leave.", session.character().name)?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input.split_once(' ').map_or((input, ""), |(c, rest)| (c, rest.trim())) {
            ("/quit", _) => break,
            ("/state", _) => {
                let c = session.character();
                writeln!(out, "[{}]", c.emotion())?;
                for (name, value) in c.params().named() {
                    writeln!(out, "  {name:<20} {value:.2}")?;
                }
            }
            ("/history", _) => {
                for (i, entry) in session.character().history().iter().enumerate() {
                    writeln!(out, "{:>3}. {:<9} {}", i + 1, entry.emotion, entry.params)?;
                }
            }
            ("/recall", query) => {
                let hits = session.recall(query);
                if hits.is_empty() {
                    writeln!(out, "No matching memories.")?;
                }
                for m in hits {
                    writeln!(out, "You: {}", m.user_input)?;
                    writeln!(out, "{}: {}", session.character().name, m.response)?;
                    writeln!(out, "  ({})", m.emotion)?;
                }
            }
            _ => match session.turn(input) {
                Ok(outcome) => {
                    writeln!(out, "{}: {}", session.character().name, outcome.response)?;
                    writeln!(out, "  [{} → {}]", outcome.emotion_before, outcome.entry.emotion)?;
                }
                Err(SessionError::EmptyInput) => {}
                Err(e) => writeln!(out, "error: {e}")?,
            },
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
