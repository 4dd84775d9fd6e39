use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PronounSlot;

/// A sentence produced during remediation for one missed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediatedSentence {
    pub verb: String,
    pub tense: String,
    pub pronoun_slot: PronounSlot,
    pub correct_form: String,
    pub sentence: String,
    pub is_correct: bool,
    pub recorded_at: DateTime<Utc>,
}
