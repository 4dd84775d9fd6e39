use serde::{Deserialize, Serialize};

use super::PronounSlot;

/// One answer per pronoun slot, in slot order.
pub type SlotAnswers = [String; PronounSlot::COUNT];

/// A missed slot collected during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseError {
    pub verb: String,
    pub tense: String,
    pub pronoun_slot: PronounSlot,
    pub correct_form: String,
    pub user_answer: String,
}

/// Per-slot verdict for one submitted exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResult {
    pub pronoun_slot: PronounSlot,
    pub user_answer: String,
    pub correct_form: String,
    pub is_correct: bool,
}

/// Trimmed, case-insensitive comparison used for every word-level check.
pub fn answers_match(submitted: &str, target: &str) -> bool {
    submitted.trim().to_lowercase() == target.trim().to_lowercase()
}
