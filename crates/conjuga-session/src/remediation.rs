//! Staged remediation: partition collected errors, then drain them round by round.
//!
//! The first `limit` errors are practised by writing a sentence that uses
//! the correct form; the rest are retried as single words. Each round keeps
//! only the entries that failed, so the union of both queues only shrinks.

use serde::{Deserialize, Serialize};

use conjuga_core::models::{answers_match, ExerciseError};

/// Split errors into `(sentence_queue, word_queue)`, preserving order.
/// The sentence queue never holds more than `limit` entries.
pub fn partition(
    mut errors: Vec<ExerciseError>,
    limit: usize,
) -> (Vec<ExerciseError>, Vec<ExerciseError>) {
    let cut = limit.min(errors.len());
    let word_queue = errors.split_off(cut);
    (errors, word_queue)
}

/// True when `form` occurs in `sentence` as a whole whitespace-separated
/// token, ignoring case. Punctuation stays part of its token, so "falo."
/// does not match "falo". Multi-word forms must appear as a contiguous
/// token run.
pub fn sentence_contains_form(sentence: &str, form: &str) -> bool {
    let target = tokens(form);
    if target.is_empty() {
        return false;
    }
    let words = tokens(sentence);
    words
        .windows(target.len())
        .any(|window| window == target.as_slice())
}

fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Verdict on one word-queue retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordVerdict {
    pub error: ExerciseError,
    pub answer: String,
    pub is_correct: bool,
}

/// Verdict on one practice sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceVerdict {
    pub error: ExerciseError,
    pub sentence: String,
    pub is_correct: bool,
}

/// Everything judged in one remediation round, in queue order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResults {
    pub words: Vec<WordVerdict>,
    pub sentences: Vec<SentenceVerdict>,
}

impl RoundResults {
    pub fn passed_sentences(&self) -> impl Iterator<Item = &SentenceVerdict> {
        self.sentences.iter().filter(|v| v.is_correct)
    }

    pub fn passed(&self) -> usize {
        self.words.iter().filter(|v| v.is_correct).count() + self.passed_sentences().count()
    }

    pub fn failed(&self) -> usize {
        self.words.len() + self.sentences.len() - self.passed()
    }
}

/// Judge one round. Answers pair with queue entries by position; a missing
/// answer counts as blank and fails. Returns the entries still owed.
pub fn drain_round(
    word_queue: Vec<ExerciseError>,
    sentence_queue: Vec<ExerciseError>,
    word_answers: &[String],
    sentence_answers: &[String],
) -> (Vec<ExerciseError>, Vec<ExerciseError>, RoundResults) {
    let mut results = RoundResults::default();
    let mut remaining_words = Vec::new();
    let mut remaining_sentences = Vec::new();

    for (i, error) in word_queue.into_iter().enumerate() {
        let answer = word_answers.get(i).cloned().unwrap_or_default();
        let is_correct = answers_match(&answer, &error.correct_form);
        if !is_correct {
            remaining_words.push(error.clone());
        }
        results.words.push(WordVerdict {
            error,
            answer,
            is_correct,
        });
    }

    for (i, error) in sentence_queue.into_iter().enumerate() {
        let sentence = sentence_answers.get(i).cloned().unwrap_or_default();
        let is_correct = sentence_contains_form(&sentence, &error.correct_form);
        if !is_correct {
            remaining_sentences.push(error.clone());
        }
        results.sentences.push(SentenceVerdict {
            error,
            sentence,
            is_correct,
        });
    }

    (remaining_words, remaining_sentences, results)
}
