//! Keyword-based emotion classifier.
//!
//! Maps raw message text onto one of four coarse emotional categories by
//! scanning fixed keyword lists in priority order. No scoring, no model:
//! the first category with any whitespace-bounded keyword hit wins, which
//! makes the priority contract (anger beats sadness beats anxiety) auditable
//! from the table below.
//!
//! ## Quick example
//! ```rust
//! use solace::classifier::{classify, Emotion};
//!
//! assert_eq!(classify("I am so mad and also sad"), Emotion::Angry);
//! assert_eq!(classify("I feel completely fine today"), Emotion::Neutral);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse emotional category inferred from a message.
///
/// A closed set: the classifier is total and always produces one of these,
/// defaulting to [`Emotion::Neutral`] when no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Angry,
    Sad,
    Anxious,
    Neutral,
}

impl Emotion {
    /// Lowercase label, matching the wire form the outer layer emits.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Keyword table ───────────────────────────────────────────────────────
//
// Scanned top to bottom; order is the priority contract.

const KEYWORD_TABLE: &[(Emotion, &[&str])] = &[
    (
        Emotion::Angry,
        &[
            "angry",
            "mad",
            "furious",
            "rage",
            "hate",
            "frustrated",
            "annoyed",
            "irritated",
            "outraged",
            "hostile",
            "bitter",
            "enraged",
            "irate",
            "livid",
            "infuriated",
            "agitated",
            "resentful",
        ],
    ),
    (
        Emotion::Sad,
        &[
            "sad",
            "depressed",
            "worthless",
            "hopeless",
            "miserable",
            "lonely",
            "hurt",
            "despair",
            "grief",
            "heartbroken",
            "gloomy",
            "disappointed",
            "unhappy",
            "devastated",
            "down",
            "blue",
            "melancholy",
            "helpless",
        ],
    ),
    (
        Emotion::Anxious,
        &[
            "anxious",
            "worried",
            "scared",
            "afraid",
            "nervous",
            "panic",
            "stress",
            "tense",
            "uneasy",
            "restless",
            "frightened",
            "fearful",
            "terrified",
            "apprehensive",
            "concerned",
            "overwhelmed",
            "distressed",
        ],
    ),
];

/// Classify the emotional tone of a user message.
///
/// The input is lowercased and padded with a boundary space on each side;
/// a keyword matches only as a whitespace-delimited token (`"madness"` does
/// not contain the token `mad`). Categories are tested in fixed priority
/// order anger → sadness → anxiety and the first hit wins.
///
/// Pure, deterministic, and total: any input yields an [`Emotion`].
pub fn classify(text: &str) -> Emotion {
    let padded = format!(" {} ", text.to_lowercase());

    for &(emotion, keywords) in KEYWORD_TABLE {
        if keywords
            .iter()
            .any(|kw| padded.contains(&format!(" {kw} ")))
        {
            return emotion;
        }
    }

    Emotion::Neutral
}

// ── Tests ───────────────────────────────────────────────────────────────
