//! Shared data model: pronoun slots, verb/tense keys, attempt history,
//! preferences, session errors, remediated sentences and critiques.

mod attempt;
mod critique;
mod exercise;
mod preference;
mod pronoun;
mod sentence;
mod snapshot;
mod verb_tense;

pub use attempt::{AttemptMap, AttemptRecord};
pub use critique::{Critique, SpellingCorrection};
pub use exercise::{answers_match, ExerciseError, SlotAnswers, SlotResult};
pub use preference::{PreferenceFlags, PreferenceMap};
pub use pronoun::PronounSlot;
pub use sentence::RemediatedSentence;
pub use snapshot::MasterySnapshot;
pub use verb_tense::VerbTense;
