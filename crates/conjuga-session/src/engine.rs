//! DrillEngine: the learner-facing facade.
//!
//! Wires the catalog, the selector, the store and the optional feedback
//! gateway around per-learner [`Session`]s. Every operation holds its
//! learner's session lock for its whole duration.
//!
//! Store failures during a transition never block it: they are logged and
//! returned as [`PersistenceWarning`]s on the outcome. Read-only reports
//! (`records`, `sentences`) and explicit preference writes surface them as
//! `StoreUnavailable` instead.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use conjuga_catalog::Catalog;
use conjuga_core::config::SessionConfig;
use conjuga_core::errors::{ConjugaError, ConjugaResult};
use conjuga_core::models::{
    AttemptRecord, Critique, ExerciseError, MasterySnapshot, PreferenceFlags, PronounSlot,
    RemediatedSentence, SlotAnswers,
};
use conjuga_core::traits::{IFeedbackGateway, IMasteryStore};
use conjuga_selector::ExerciseSelector;

use crate::cleanup::cleanup_stale_sessions;
use crate::events;
use crate::machine::Session;
use crate::manager::{lock, SessionManager};
use crate::outcome::{
    AdvanceOutcome, CompletionStatus, ExercisePrompt, PersistenceWarning, RecordRow,
    RemediationOutcome, RemediationPrompt, RemediationTask, StartOutcome, SubmitOutcome,
};
use crate::phase::Phase;
use crate::remediation::RoundResults;

pub struct DrillEngine {
    catalog: Arc<Catalog>,
    store: Arc<dyn IMasteryStore>,
    gateway: Option<Arc<dyn IFeedbackGateway>>,
    selector: ExerciseSelector,
    sessions: SessionManager,
    rng: Mutex<StdRng>,
    config: SessionConfig,
}

impl DrillEngine {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn IMasteryStore>, config: SessionConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            store,
            gateway: None,
            selector: ExerciseSelector::new(config.primary_target),
            sessions: SessionManager::new(),
            rng: Mutex::new(rng),
            config,
        }
    }

    /// Attach a critique service for [`DrillEngine::sentence_feedback`].
    pub fn with_gateway(mut self, gateway: Arc<dyn IFeedbackGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self, learner: &str) -> Phase {
        self.sessions.phase(learner)
    }

    // ── Drilling ──────────────────────────────────────────────────────────

    /// Select a batch and begin drilling. An empty selection leaves the
    /// session idle; check [`StartOutcome::nothing_available`].
    pub fn start(&self, learner: &str, batch_size: usize) -> ConjugaResult<StartOutcome> {
        let handle = self.sessions.handle(learner);
        let mut session = lock(&handle);
        if session.phase() != Phase::Idle {
            return Err(ConjugaError::invalid_state("start", session.phase()));
        }

        let mut warnings = Vec::new();
        let snapshot = self.snapshot(learner, &mut warnings);
        let batch = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            self.selector
                .select(&self.catalog, &snapshot, batch_size, &mut *rng)
        };

        if session.start(batch.clone())? {
            events::session_started(learner, session.id(), batch.len());
        } else {
            events::nothing_available(learner);
        }
        Ok(StartOutcome { batch, warnings })
    }

    /// The exercise at the cursor with its display context.
    pub fn current_exercise(&self, learner: &str) -> ConjugaResult<ExercisePrompt> {
        let handle = self.sessions.handle(learner);
        let session = lock(&handle);
        self.prompt(&session)
            .ok_or_else(|| ConjugaError::invalid_state("current_exercise", session.phase()))
    }

    /// Grade the current exercise and record one attempt per slot.
    pub fn submit_exercise(
        &self,
        learner: &str,
        answers: &SlotAnswers,
    ) -> ConjugaResult<SubmitOutcome> {
        let handle = self.sessions.handle(learner);
        let mut session = lock(&handle);
        let (results, errors) = session.submit(&self.catalog, answers)?;

        let mut warnings = Vec::new();
        if let Some(pair) = session.current_pair() {
            let timestamp = Utc::now();
            for result in &results {
                let record = AttemptRecord {
                    verb: pair.verb.clone(),
                    tense: pair.tense.clone(),
                    pronoun_slot: result.pronoun_slot,
                    user_answer: result.user_answer.clone(),
                    is_correct: result.is_correct,
                    timestamp,
                };
                if let Err(e) = self.store.save_attempt(learner, &record) {
                    events::persistence_degraded(learner, "save_attempt", &e);
                    warnings.push(PersistenceWarning::new("save_attempt", e));
                }
            }
            events::exercise_submitted(learner, &pair.verb, &pair.tense, errors.len());
        }

        Ok(SubmitOutcome {
            results,
            errors,
            warnings,
        })
    }

    /// Move past the submitted exercise. After the last one the collected
    /// errors are split into remediation queues in the same call.
    pub fn advance(&self, learner: &str) -> ConjugaResult<AdvanceOutcome> {
        let handle = self.sessions.handle(learner);
        let mut session = lock(&handle);

        match session.advance()? {
            Phase::AwaitingRemediationSplit => {}
            _ => {
                return self
                    .prompt(&session)
                    .map(AdvanceOutcome::NextExercise)
                    .ok_or_else(|| ConjugaError::invalid_state("advance", session.phase()));
            }
        }

        match session.split(self.config.sentence_practice_limit)? {
            Phase::Complete => {
                let status = session.completion().unwrap_or(CompletionStatus::AllCorrect);
                events::session_completed(learner, status);
                Ok(AdvanceOutcome::Complete(status))
            }
            _ => {
                let sentence_queue = session.sentence_queue().len();
                let word_queue = session.word_queue().len();
                events::remediation_split(learner, sentence_queue, word_queue);
                Ok(AdvanceOutcome::RemediationPending {
                    sentence_queue,
                    word_queue,
                })
            }
        }
    }

    // ── Remediation ───────────────────────────────────────────────────────

    /// Open the next remediation round and show both queues.
    pub fn remediation_prompt(&self, learner: &str) -> ConjugaResult<RemediationPrompt> {
        let handle = self.sessions.handle(learner);
        let mut session = lock(&handle);
        let (words, sentences) = session.present()?;
        Ok(RemediationPrompt {
            word_queue: words.iter().map(|e| self.task(e)).collect(),
            sentence_queue: sentences.iter().map(|e| self.task(e)).collect(),
        })
    }

    /// Judge one round and conclude it. Accepted while a round is pending
    /// (it is opened implicitly) or open. Passing sentences are stored.
    pub fn submit_remediation(
        &self,
        learner: &str,
        word_answers: &[String],
        sentence_answers: &[String],
    ) -> ConjugaResult<RemediationOutcome> {
        let handle = self.sessions.handle(learner);
        let mut session = lock(&handle);
        if session.phase() == Phase::RemediationPending {
            session.present()?;
        }

        let results = session.submit_remediation(word_answers, sentence_answers)?;
        let warnings = self.record_sentences(learner, &results);
        let phase = session.conclude_round()?;

        let remaining_words = session.word_queue().len();
        let remaining_sentences = session.sentence_queue().len();
        events::remediation_round(learner, results.passed(), remaining_words + remaining_sentences);

        let completion = session.completion();
        if let Some(status) = completion {
            events::session_completed(learner, status);
        }

        Ok(RemediationOutcome {
            results,
            phase,
            remaining_words,
            remaining_sentences,
            completion,
            warnings,
        })
    }

    fn record_sentences(&self, learner: &str, results: &RoundResults) -> Vec<PersistenceWarning> {
        let mut warnings = Vec::new();
        for verdict in results.passed_sentences() {
            let sentence = RemediatedSentence {
                verb: verdict.error.verb.clone(),
                tense: verdict.error.tense.clone(),
                pronoun_slot: verdict.error.pronoun_slot,
                correct_form: verdict.error.correct_form.clone(),
                sentence: verdict.sentence.clone(),
                is_correct: verdict.is_correct,
                recorded_at: Utc::now(),
            };
            if let Err(e) = self.store.save_remediated_sentence(learner, &sentence) {
                events::persistence_degraded(learner, "save_remediated_sentence", &e);
                warnings.push(PersistenceWarning::new("save_remediated_sentence", e));
            }
        }
        warnings
    }

    /// Optional critique of a produced sentence. `None` when no gateway is
    /// attached or the call fails; never affects pass/fail.
    pub fn sentence_feedback(&self, sentence: &str, target_form: &str) -> Option<Critique> {
        let gateway = self.gateway.as_ref()?;
        match gateway.critique(sentence, target_form) {
            Ok(critique) => Some(critique),
            Err(e) => {
                events::feedback_unavailable(&e.to_string());
                None
            }
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Complete → Idle.
    pub fn reset(&self, learner: &str) -> ConjugaResult<()> {
        let handle = self.sessions.handle(learner);
        let mut session = lock(&handle);
        session.reset()
    }

    /// Drop the learner's session in whatever phase it is. Returns whether
    /// one existed.
    pub fn abandon(&self, learner: &str) -> bool {
        self.sessions.remove(learner).is_some()
    }

    /// Remove sessions idle for longer than the configured timeout.
    pub fn cleanup_stale_sessions(&self) -> usize {
        let timeout = i64::try_from(self.config.inactivity_timeout_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        cleanup_stale_sessions(&self.sessions, timeout)
    }

    // ── Reports and preferences ───────────────────────────────────────────

    /// Mastery overview for every catalog pair, in catalog order.
    pub fn records(&self, learner: &str) -> ConjugaResult<Vec<RecordRow>> {
        let snapshot = MasterySnapshot::new(
            self.store.load_attempts(learner)?,
            self.store.load_preferences(learner)?,
        );

        Ok(self
            .catalog
            .pairs()
            .map(|pair| RecordRow {
                verb: pair.verb.clone(),
                tense: pair.tense.clone(),
                tense_name: self.catalog.tense_name(&pair.tense).to_string(),
                latest: PronounSlot::ALL
                    .map(|slot| snapshot.attempts.get(&(pair.clone(), slot)).cloned()),
                mastered: snapshot.is_mastered(pair),
                preferences: snapshot.preference(pair),
            })
            .collect())
    }

    /// Every stored remediated sentence, oldest first.
    pub fn sentences(&self, learner: &str) -> ConjugaResult<Vec<RemediatedSentence>> {
        Ok(self.store.load_sentences(learner)?)
    }

    /// Replace the flags for one catalog pair.
    pub fn update_preference(
        &self,
        learner: &str,
        verb: &str,
        tense: &str,
        flags: PreferenceFlags,
    ) -> ConjugaResult<()> {
        self.catalog.lookup(verb, tense)?;
        self.store.save_preference(learner, verb, tense, flags)?;
        tracing::info!(
            learner = %learner,
            verb = %verb,
            tense = %tense,
            never_show = flags.never_show,
            always_show = flags.always_show,
            show_primarily = flags.show_primarily,
            "preference updated"
        );
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn snapshot(&self, learner: &str, warnings: &mut Vec<PersistenceWarning>) -> MasterySnapshot {
        let attempts = self.store.load_attempts(learner).unwrap_or_else(|e| {
            events::persistence_degraded(learner, "load_attempts", &e);
            warnings.push(PersistenceWarning::new("load_attempts", e));
            Default::default()
        });
        let preferences = self.store.load_preferences(learner).unwrap_or_else(|e| {
            events::persistence_degraded(learner, "load_preferences", &e);
            warnings.push(PersistenceWarning::new("load_preferences", e));
            Default::default()
        });
        MasterySnapshot::new(attempts, preferences)
    }

    fn prompt(&self, session: &Session) -> Option<ExercisePrompt> {
        let index = session.phase().cursor()?;
        let pair = session.current_pair()?;
        Some(ExercisePrompt {
            index,
            total: session.batch().len(),
            verb: pair.verb.clone(),
            tense: pair.tense.clone(),
            tense_name: self.catalog.tense_name(&pair.tense).to_string(),
            pronouns: PronounSlot::ALL.map(PronounSlot::label),
        })
    }

    fn task(&self, error: &ExerciseError) -> RemediationTask {
        RemediationTask {
            error: error.clone(),
            tense_name: self.catalog.tense_name(&error.tense).to_string(),
            pronoun: error.pronoun_slot.label(),
        }
    }
}
