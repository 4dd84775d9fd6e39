//! Values returned by `DrillEngine` operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use conjuga_core::errors::StorageError;
use conjuga_core::models::{
    AttemptRecord, ExerciseError, PreferenceFlags, PronounSlot, SlotResult, VerbTense,
};

use crate::phase::Phase;
use crate::remediation::RoundResults;

/// A store write or read that failed without blocking the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    pub operation: String,
    pub error: StorageError,
}

impl PersistenceWarning {
    pub fn new(operation: impl Into<String>, error: StorageError) -> Self {
        Self {
            operation: operation.into(),
            error,
        }
    }
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.error)
    }
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// No slot was missed in the batch.
    AllCorrect,
    /// Misses were collected and drained through remediation.
    Remediated,
}

/// The exercise at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePrompt {
    pub index: usize,
    pub total: usize,
    pub verb: String,
    pub tense: String,
    pub tense_name: String,
    pub pronouns: [&'static str; PronounSlot::COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOutcome {
    pub batch: Vec<VerbTense>,
    pub warnings: Vec<PersistenceWarning>,
}

impl StartOutcome {
    /// Nothing was eligible; the session stayed idle.
    pub fn nothing_available(&self) -> bool {
        self.batch.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub results: Vec<SlotResult>,
    pub errors: Vec<ExerciseError>,
    pub warnings: Vec<PersistenceWarning>,
}

impl SubmitOutcome {
    pub fn all_correct(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextExercise(ExercisePrompt),
    RemediationPending {
        sentence_queue: usize,
        word_queue: usize,
    },
    Complete(CompletionStatus),
}

/// One queued error with its display context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationTask {
    pub error: ExerciseError,
    pub tense_name: String,
    pub pronoun: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemediationPrompt {
    pub word_queue: Vec<RemediationTask>,
    pub sentence_queue: Vec<RemediationTask>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationOutcome {
    pub results: RoundResults,
    pub phase: Phase,
    pub remaining_words: usize,
    pub remaining_sentences: usize,
    pub completion: Option<CompletionStatus>,
    pub warnings: Vec<PersistenceWarning>,
}

impl RemediationOutcome {
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }
}

/// Mastery overview for one catalog pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub verb: String,
    pub tense: String,
    pub tense_name: String,
    pub latest: [Option<AttemptRecord>; PronounSlot::COUNT],
    pub mastered: bool,
    pub preferences: PreferenceFlags,
}

impl RecordRow {
    pub fn attempted(&self) -> bool {
        self.latest.iter().any(Option::is_some)
    }
}
