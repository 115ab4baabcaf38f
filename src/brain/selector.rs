//! Personality selection and the keyword score heuristic.

use crate::config::PersonalityKey;

/// Scores above this hand control to the commander.
pub const COMMANDER_THRESHOLD: f64 = 0.7;

/// Scores below this hand control to the sage.
pub const SAGE_THRESHOLD: f64 = 0.3;

const SAGE_KEYWORDS: &[&str] = &["fear", "danger"];
const DISRUPTOR_KEYWORDS: &[&str] = &["idea", "new", "creative"];

const BULLISH_KEYWORDS: &[&str] = &["money", "buy"];
const BEARISH_KEYWORDS: &[&str] = &["problem"];

/// Picks the personality that answers a message.
///
/// Rules are checked in order and the first match wins:
/// 1. `score > 0.7` selects [`PersonalityKey::Commander`].
/// 2. `score < 0.3`, or text mentioning "fear" or "danger", selects
///    [`PersonalityKey::Sage`].
/// 3. Text mentioning "idea", "new" or "creative" selects
///    [`PersonalityKey::Disruptor`].
/// 4. Anything else selects [`PersonalityKey::Neutral`].
///
/// Keywords match case-insensitively anywhere in the text.
#[must_use]
pub fn select_personality(score: f64, text: &str) -> PersonalityKey {
    let text = text.to_lowercase();

    if score > COMMANDER_THRESHOLD {
        PersonalityKey::Commander
    } else if score < SAGE_THRESHOLD || contains_any(&text, SAGE_KEYWORDS) {
        PersonalityKey::Sage
    } else if contains_any(&text, DISRUPTOR_KEYWORDS) {
        PersonalityKey::Disruptor
    } else {
        PersonalityKey::Neutral
    }
}

/// Derives a coarse market score from message text.
///
/// Placeholder heuristic: "money"/"buy" → 0.8, "problem" → 0.2,
/// anything else → 0.5.
#[must_use]
pub fn derive_score(text: &str) -> f64 {
    let text = text.to_lowercase();

    if contains_any(&text, BULLISH_KEYWORDS) {
        0.8
    } else if contains_any(&text, BEARISH_KEYWORDS) {
        0.2
    } else {
        0.5
    }
}

/// Checks `haystack` for any of the lower-case `needles`.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
