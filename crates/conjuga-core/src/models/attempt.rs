use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PronounSlot, VerbTense};

/// Latest attempt per (verb, tense, slot).
pub type AttemptMap = HashMap<(VerbTense, PronounSlot), AttemptRecord>;

/// One submitted answer for one pronoun slot.
///
/// Every submission appends a record; only the newest per
/// (verb, tense, slot) counts towards mastery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub verb: String,
    pub tense: String,
    pub pronoun_slot: PronounSlot,
    pub user_answer: String,
    pub is_correct: bool,
    pub timestamp: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn pair(&self) -> VerbTense {
        VerbTense::new(&self.verb, &self.tense)
    }

    /// Map key for this record.
    pub fn key(&self) -> (VerbTense, PronounSlot) {
        (self.pair(), self.pronoun_slot)
    }
}
