//! Configuration for the psichat affect model.
//!
//! Maps directly to `psichat.toml`. Every field has a default, so an empty
//! file reproduces the reference rule set exactly.

use serde::{Deserialize, Serialize};

use crate::types::AffectParams;

/// Top-level psichat configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PsiConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Starting parameters and sentiment coupling.
    #[serde(default)]
    pub affect: AffectConfig,
    /// Keyword cue sets.
    #[serde(default)]
    pub cues: CueConfig,
    /// Built-in keyword sentiment scorer.
    #[serde(default)]
    pub sentiment: SentimentConfig,
    /// Conversation memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl PsiConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `PsiError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::PsiError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Affect model tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffectConfig {
    /// Parameters a character starts from before trait seeding.
    #[serde(default = "default_baseline")]
    pub baseline: AffectParams,
    /// How strongly a sentiment score moves valence and arousal.
    #[serde(default = "default_0_1")]
    pub sentiment_gain: f64,
}

impl Default for AffectConfig {
    fn default() -> Self {
        Self {
            baseline: AffectParams::BASELINE,
            sentiment_gain: 0.1,
        }
    }
}

/// Keyword sets for cue detection. Matching is case-insensitive substring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CueConfig {
    /// Anger cues.
    #[serde(default = "default_anger_cues")]
    pub anger: Vec<String>,
    /// Sadness cues.
    #[serde(default = "default_sadness_cues")]
    pub sadness: Vec<String>,
    /// Joy cues.
    #[serde(default = "default_joy_cues")]
    pub joy: Vec<String>,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            anger: default_anger_cues(),
            sadness: default_sadness_cues(),
            joy: default_joy_cues(),
        }
    }
}

/// Settings for [`crate::sentiment::KeywordSentiment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Score returned when no keyword matches.
    #[serde(default = "default_0_1")]
    pub baseline: f64,
    /// Absolute score returned on a positive or negative match.
    #[serde(default = "default_0_5")]
    pub magnitude: f64,
    /// Words that make a message positive.
    #[serde(default = "default_positive_words")]
    pub positive: Vec<String>,
    /// Words that make a message negative (checked after `positive`).
    #[serde(default = "default_negative_words")]
    pub negative: Vec<String>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            baseline: 0.1,
            magnitude: 0.5,
            positive: default_positive_words(),
            negative: default_negative_words(),
        }
    }
}

/// Conversation memory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Maximum number of exchanges returned by a recall query.
    #[serde(default = "default_3_usize")]
    pub recall_limit: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { recall_limit: 3 }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

fn default_log_level() -> String { "info".to_string() }
fn default_baseline() -> AffectParams { AffectParams::BASELINE }
fn default_0_1() -> f64 { 0.1 }
fn default_0_5() -> f64 { 0.5 }
fn default_3_usize() -> usize { 3 }
fn default_anger_cues() -> Vec<String> { words(&["angry", "mad", "hate", "annoy"]) }
fn default_sadness_cues() -> Vec<String> { words(&["sad", "depress", "cry", "lonely"]) }
fn default_joy_cues() -> Vec<String> { words(&["happy", "joy", "excite", "love"]) }
fn default_positive_words() -> Vec<String> { words(&["happy", "great", "love"]) }
fn default_negative_words() -> Vec<String> { words(&["sad", "bad", "hate"]) }
