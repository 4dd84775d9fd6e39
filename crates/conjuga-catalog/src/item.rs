//! One conjugation table and answer grading against it.

use serde::{Deserialize, Serialize};

use conjuga_core::models::{answers_match, ExerciseError, PronounSlot, SlotAnswers, SlotResult, VerbTense};

/// Four surface forms of one verb in one tense, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationItem {
    pub verb: String,
    pub tense: String,
    pub forms: [String; PronounSlot::COUNT],
}

impl ConjugationItem {
    pub fn pair(&self) -> VerbTense {
        VerbTense::new(&self.verb, &self.tense)
    }

    /// Target form for a slot.
    pub fn form(&self, slot: PronounSlot) -> &str {
        &self.forms[slot.index()]
    }

    /// Grade one answer per slot. Results come back in slot order.
    pub fn grade(&self, answers: &SlotAnswers) -> Vec<SlotResult> {
        PronounSlot::ALL
            .iter()
            .map(|&slot| {
                let submitted = &answers[slot.index()];
                let target = self.form(slot);
                SlotResult {
                    pronoun_slot: slot,
                    user_answer: submitted.clone(),
                    correct_form: target.to_string(),
                    is_correct: answers_match(submitted, target),
                }
            })
            .collect()
    }

    /// Errors for the incorrect slots of a graded submission.
    pub fn errors_from(&self, results: &[SlotResult]) -> Vec<ExerciseError> {
        results
            .iter()
            .filter(|r| !r.is_correct)
            .map(|r| ExerciseError {
                verb: self.verb.clone(),
                tense: self.tense.clone(),
                pronoun_slot: r.pronoun_slot,
                correct_form: r.correct_form.clone(),
                user_answer: r.user_answer.clone(),
            })
            .collect()
    }
}
