//! Integration Tests — end-to-end affect flows.
//!
//! These tests drive characters through whole conversations: seeding,
//! sentiment scoring, cue handling, classification, history and recall.

use psichat_core::affect::{AffectUpdater, Cue, ParamOverrides};
use psichat_core::character::Character;
use psichat_core::config::PsiConfig;
use psichat_core::sentiment::{KeywordSentiment, SentimentSource};
use psichat_core::types::{AffectParams, Emotion};

fn traits(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_string()).collect()
}

// ---------------------------------------------------------------------------
// A hostile conversation pushes an aggressive character into anger
// ---------------------------------------------------------------------------

#[test]
fn aggressive_character_escalates_to_anger() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let sentiment = KeywordSentiment::new(&config.sentiment);
    let mut ahab = Character::new(
        "Ahab",
        "Monomaniacal captain",
        traits(&["aggressive", "obsessive"]),
        &config,
    );
    assert_eq!(ahab.emotion(), Emotion::Neutral);

    // Every line scores -0.5, so valence drops 0.05 per turn.
    let lines = [
        "I hate the whale",
        "That was a bad decision",
        "I hate this ship",
        "I hate you, bad captain",
        "I hate the sea",
        "This is bad",
    ];
    let mut emotions = Vec::new();
    for line in lines {
        let entry = ahab.record_exchange(&updater, line, "...", &sentiment);
        emotions.push(entry.emotion);
    }

    assert_eq!(ahab.emotion(), Emotion::Anger);
    assert_eq!(emotions.last(), Some(&Emotion::Anger));
    assert_eq!(ahab.history().len(), lines.len());
    assert_eq!(ahab.memory().len(), lines.len());
    assert!(ahab.params().is_in_range());
}

// ---------------------------------------------------------------------------
// Strict thresholds: sums that land exactly on a bound do not cross it
// ---------------------------------------------------------------------------

#[test]
fn two_sad_turns_land_on_the_valence_bound() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let sentiment = KeywordSentiment::new(&config.sentiment);
    let mut pip = Character::new("Pip", "Cabin boy", vec![], &config);

    pip.record_exchange(&updater, "I feel sad", "...", &sentiment);
    let entry = pip.record_exchange(&updater, "I feel sad", "...", &sentiment);

    assert_eq!(entry.params.valence, 0.4);
    assert!(entry.params.arousal < 0.4);
    assert_eq!(entry.emotion, Emotion::Neutral);
}

#[test]
fn four_hostile_turns_land_on_the_anger_bound() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let sentiment = KeywordSentiment::new(&config.sentiment);
    let mut ahab = Character::new("Ahab", "Captain", traits(&["aggressive"]), &config);

    for _ in 0..4 {
        ahab.record_exchange(&updater, "I hate the whale", "...", &sentiment);
    }
    assert!(ahab.params().valence >= 0.3);
    assert_eq!(ahab.params().arousal, 1.0);
    assert_eq!(ahab.params().selection_threshold, 1.0);
    assert_eq!(ahab.emotion(), Emotion::Neutral);

    ahab.record_exchange(&updater, "I hate the whale", "...", &sentiment);
    assert_eq!(ahab.emotion(), Emotion::Anger);
}

// ---------------------------------------------------------------------------
// Sadness: calm and low valence
// ---------------------------------------------------------------------------

#[test]
fn lonely_messages_lead_to_sadness() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let mut pip = Character::new("Pip", "Cabin boy", vec![], &config);

    for _ in 0..3 {
        pip.interact(&updater, "I feel so lonely and I cry every night", -1.0);
    }
    // valence 0.5 → 0.2; arousal net −0.05 per turn → 0.35
    assert!(pip.params().valence < 0.4);
    assert!(pip.params().arousal < 0.4);
    assert_eq!(pip.emotion(), Emotion::Sadness);
}

// ---------------------------------------------------------------------------
// Bliss: appetitive but calm, reached through explicit overrides
// ---------------------------------------------------------------------------

#[test]
fn calm_optimist_is_blissful_after_kind_words() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let overrides = ParamOverrides {
        arousal: Some(0.1),
        ..ParamOverrides::default()
    };
    let mut starbuck = Character::with_overrides(
        "Starbuck",
        "Thoughtful first mate",
        traits(&["optimistic"]),
        &config,
        Some(&overrides),
    );
    assert_eq!(starbuck.params().valence, 0.7);
    assert_eq!(starbuck.params().arousal, 0.1);

    let entry = starbuck.interact(&updater, "Thank you for the tea", 0.5);
    // valence 0.75, arousal 0.15
    assert_eq!(entry.emotion, Emotion::Bliss);
}

// ---------------------------------------------------------------------------
// Joy/Bliss gap: high valence with mid arousal stays neutral
// ---------------------------------------------------------------------------

#[test]
fn high_valence_mid_arousal_is_neutral() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let overrides = ParamOverrides {
        valence: Some(0.95),
        arousal: Some(0.45),
        ..ParamOverrides::default()
    };
    let mut c = Character::with_overrides("Flask", "Third mate", vec![], &config, Some(&overrides));
    let entry = c.interact(&updater, "Nice weather", 0.0);
    assert!(entry.params.valence > 0.7);
    assert!((0.4..=0.6).contains(&entry.params.arousal));
    assert_eq!(entry.emotion, Emotion::Neutral);
}

// ---------------------------------------------------------------------------
// History snapshots never change after being appended
// ---------------------------------------------------------------------------

#[test]
fn history_snapshots_are_frozen() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let mut c = Character::new("Stubb", "Second mate", vec![], &config);

    let first = c.interact(&updater, "I'm so happy", 0.8);
    let snapshot = c.history().as_slice()[0];
    for _ in 0..10 {
        c.interact(&updater, "you annoy me", -1.0);
    }
    assert_eq!(c.history().as_slice()[0], snapshot);
    assert_eq!(c.history().as_slice()[0], first);
    assert_ne!(c.params(), &first.params);
    assert_eq!(c.history().len(), 11);
}

// ---------------------------------------------------------------------------
// Custom cue sets and sentiment gain from TOML
// ---------------------------------------------------------------------------

#[test]
fn configured_cues_and_gain_drive_updates() {
    let config = PsiConfig::from_toml(
        r#"
        [affect]
        sentiment_gain = 0.0

        [cues]
        anger = ["grr"]
        sadness = []
        joy = ["yay"]
        "#,
    )
    .expect("config");
    let updater = AffectUpdater::new(&config);

    assert_eq!(updater.cues().detect("I hate this"), Cue::None);
    assert_eq!(updater.cues().detect("GRR"), Cue::Anger);

    let mut c = Character::new("Tashtego", "Harpooner", vec![], &config);
    let entry = c.interact(&updater, "yay", 1.0);
    assert_eq!(entry.params.valence, 0.65);
    assert_eq!(entry.params.arousal, 0.6);
}

// ---------------------------------------------------------------------------
// Memory recall across a conversation
// ---------------------------------------------------------------------------

#[test]
fn recall_finds_past_exchanges_with_their_emotion() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let sentiment = KeywordSentiment::default();
    let mut c = Character::new("Ishmael", "Narrator", traits(&["detailed"]), &config);

    c.record_exchange(&updater, "Call me a sailor", "Aye, a sailor you are.", &sentiment);
    c.record_exchange(&updater, "I love the sea", "The Sea is my home.", &sentiment);
    c.record_exchange(&updater, "Tell me of whales", "Vast and white.", &sentiment);

    let hits = c.recall("SEA", config.memory.recall_limit);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].user_input, "I love the sea");
    // Recorded before its own update was applied.
    assert_eq!(hits[0].emotion, Emotion::Neutral);
    assert_eq!(hits[0].params.resolution_level, 0.9);

    assert!(c.recall("kraken", 3).is_empty());
}

// ---------------------------------------------------------------------------
// External sentiment sources plug in as closures
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_sentiment_is_clamped() {
    let config = PsiConfig::default();
    let updater = AffectUpdater::new(&config);
    let wild = |_: &str| 40.0_f64;
    let mut a = Character::new("A", "", vec![], &config);
    let mut b = Character::new("B", "", vec![], &config);

    a.record_exchange(&updater, "hello", "hi", &wild);
    b.interact(&updater, "hello", 1.0);
    assert_eq!(a.params(), b.params());
    assert_eq!(wild.score("x"), 40.0);
}

#[test]
fn baseline_character_has_exact_defaults() {
    let c = Character::new("Fedallah", "Mysterious", traits(&["silent"]), &PsiConfig::default());
    assert_eq!(c.params(), &AffectParams::BASELINE);
    assert!(c.history().is_empty());
}
