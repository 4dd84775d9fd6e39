//! Session: the drill state machine for one learner.
//!
//! Every transition checks the current [`Phase`] first and returns
//! `InvalidState` without touching anything when it does not apply.
//! The machine never talks to the store; callers persist what the
//! transitions return.

use chrono::{DateTime, Duration, Utc};

use conjuga_catalog::Catalog;
use conjuga_core::errors::{ConjugaError, ConjugaResult};
use conjuga_core::models::{ExerciseError, SlotAnswers, SlotResult, VerbTense};

use crate::outcome::CompletionStatus;
use crate::phase::Phase;
use crate::remediation::{self, RoundResults};

/// In-progress run: batch, cursor (inside `phase`), errors and queues.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    learner: String,
    phase: Phase,
    batch: Vec<VerbTense>,
    collected_errors: Vec<ExerciseError>,
    sentence_queue: Vec<ExerciseError>,
    word_queue: Vec<ExerciseError>,
    last_results: Vec<SlotResult>,
    completion: Option<CompletionStatus>,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(learner: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            learner: learner.into(),
            phase: Phase::Idle,
            batch: Vec::new(),
            collected_errors: Vec::new(),
            sentence_queue: Vec::new(),
            word_queue: Vec::new(),
            last_results: Vec::new(),
            completion: None,
            created_at: now,
            last_activity: now,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn learner(&self) -> &str {
        &self.learner
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn batch(&self) -> &[VerbTense] {
        &self.batch
    }

    /// Pair at the cursor while drilling.
    pub fn current_pair(&self) -> Option<&VerbTense> {
        self.phase.cursor().and_then(|i| self.batch.get(i))
    }

    pub fn collected_errors(&self) -> &[ExerciseError] {
        &self.collected_errors
    }

    pub fn sentence_queue(&self) -> &[ExerciseError] {
        &self.sentence_queue
    }

    pub fn word_queue(&self) -> &[ExerciseError] {
        &self.word_queue
    }

    /// Per-slot results of the latest submission.
    pub fn last_results(&self) -> &[SlotResult] {
        &self.last_results
    }

    pub fn completion(&self) -> Option<CompletionStatus> {
        self.completion
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    pub fn idle_duration(&self) -> Duration {
        Utc::now() - self.last_activity
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    fn reject(&self, operation: &'static str) -> ConjugaError {
        ConjugaError::invalid_state(operation, self.phase)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Idle → Active(0). An empty batch leaves the session idle and
    /// returns `false`.
    pub fn start(&mut self, batch: Vec<VerbTense>) -> ConjugaResult<bool> {
        if self.phase != Phase::Idle {
            return Err(self.reject("start"));
        }
        if batch.is_empty() {
            return Ok(false);
        }
        self.batch = batch;
        self.phase = Phase::Active(0);
        self.touch();
        Ok(true)
    }

    /// Active(i) → Submitted(i). Grades against the catalog and appends an
    /// error per missed slot. Returns the per-slot results and the new errors.
    pub fn submit(
        &mut self,
        catalog: &Catalog,
        answers: &SlotAnswers,
    ) -> ConjugaResult<(Vec<SlotResult>, Vec<ExerciseError>)> {
        let Phase::Active(i) = self.phase else {
            return Err(self.reject("submit"));
        };
        let pair = self.batch.get(i).ok_or_else(|| self.reject("submit"))?;
        let item = catalog.lookup(&pair.verb, &pair.tense)?;

        let results = item.grade(answers);
        let errors = item.errors_from(&results);

        self.collected_errors.extend(errors.iter().cloned());
        self.last_results = results.clone();
        self.phase = Phase::Submitted(i);
        self.touch();
        Ok((results, errors))
    }

    /// Submitted(i) → Active(i+1), or AwaitingRemediationSplit after the
    /// last item.
    pub fn advance(&mut self) -> ConjugaResult<Phase> {
        let Phase::Submitted(i) = self.phase else {
            return Err(self.reject("advance"));
        };
        self.phase = if i + 1 < self.batch.len() {
            Phase::Active(i + 1)
        } else {
            Phase::AwaitingRemediationSplit
        };
        self.last_results.clear();
        self.touch();
        Ok(self.phase)
    }

    /// AwaitingRemediationSplit → RemediationPending, or Complete when no
    /// error was collected. At most `sentence_limit` errors go to the
    /// sentence queue.
    pub fn split(&mut self, sentence_limit: usize) -> ConjugaResult<Phase> {
        if self.phase != Phase::AwaitingRemediationSplit {
            return Err(self.reject("split"));
        }
        let (sentences, words) =
            remediation::partition(self.collected_errors.clone(), sentence_limit);
        self.sentence_queue = sentences;
        self.word_queue = words;

        if self.sentence_queue.is_empty() && self.word_queue.is_empty() {
            self.phase = Phase::Complete;
            self.completion = Some(CompletionStatus::AllCorrect);
        } else {
            self.phase = Phase::RemediationPending;
        }
        self.touch();
        Ok(self.phase)
    }

    /// RemediationPending → RemediationActive. Returns `(word_queue, sentence_queue)`.
    pub fn present(&mut self) -> ConjugaResult<(&[ExerciseError], &[ExerciseError])> {
        if self.phase != Phase::RemediationPending {
            return Err(self.reject("present"));
        }
        self.phase = Phase::RemediationActive;
        self.touch();
        Ok((&self.word_queue, &self.sentence_queue))
    }

    /// RemediationActive → RemediationSubmitted. Failing entries stay queued.
    pub fn submit_remediation(
        &mut self,
        word_answers: &[String],
        sentence_answers: &[String],
    ) -> ConjugaResult<RoundResults> {
        if self.phase != Phase::RemediationActive {
            return Err(self.reject("submit_remediation"));
        }
        let (words, sentences, results) = remediation::drain_round(
            std::mem::take(&mut self.word_queue),
            std::mem::take(&mut self.sentence_queue),
            word_answers,
            sentence_answers,
        );
        self.word_queue = words;
        self.sentence_queue = sentences;
        self.phase = Phase::RemediationSubmitted;
        self.touch();
        Ok(results)
    }

    /// RemediationSubmitted → RemediationPending while anything is queued,
    /// otherwise Complete.
    pub fn conclude_round(&mut self) -> ConjugaResult<Phase> {
        if self.phase != Phase::RemediationSubmitted {
            return Err(self.reject("conclude_round"));
        }
        if self.word_queue.is_empty() && self.sentence_queue.is_empty() {
            self.phase = Phase::Complete;
            self.completion = Some(CompletionStatus::Remediated);
        } else {
            self.phase = Phase::RemediationPending;
        }
        self.touch();
        Ok(self.phase)
    }

    /// Complete → Idle, dropping the batch, errors and queues.
    pub fn reset(&mut self) -> ConjugaResult<()> {
        if self.phase != Phase::Complete {
            return Err(self.reject("reset"));
        }
        self.phase = Phase::Idle;
        self.batch.clear();
        self.collected_errors.clear();
        self.sentence_queue.clear();
        self.word_queue.clear();
        self.last_results.clear();
        self.completion = None;
        self.touch();
        Ok(())
    }
}
