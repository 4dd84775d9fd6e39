//! Structured log events for drill sessions.
//!
//! Each function emits a `tracing` event with structured fields.

use conjuga_core::errors::StorageError;

use crate::outcome::CompletionStatus;

/// Log a batch being handed to a learner.
pub fn session_started(learner: &str, session_id: &str, batch_size: usize) {
    tracing::info!(
        event = "session_started",
        learner = %learner,
        session_id = %session_id,
        batch_size = batch_size,
        "session started"
    );
}

/// Log a start request with nothing eligible.
pub fn nothing_available(learner: &str) {
    tracing::info!(
        event = "nothing_available",
        learner = %learner,
        "no eligible exercises"
    );
}

/// Log one graded exercise.
pub fn exercise_submitted(learner: &str, verb: &str, tense: &str, missed: usize) {
    tracing::debug!(
        event = "exercise_submitted",
        learner = %learner,
        verb = %verb,
        tense = %tense,
        missed = missed,
        "exercise submitted"
    );
}

/// Log the split of collected errors into remediation queues.
pub fn remediation_split(learner: &str, sentence_queue: usize, word_queue: usize) {
    tracing::info!(
        event = "remediation_split",
        learner = %learner,
        sentence_queue = sentence_queue,
        word_queue = word_queue,
        "remediation split"
    );
}

/// Log one judged remediation round.
pub fn remediation_round(learner: &str, passed: usize, remaining: usize) {
    tracing::debug!(
        event = "remediation_round",
        learner = %learner,
        passed = passed,
        remaining = remaining,
        "remediation round judged"
    );
}

/// Log a finished run.
pub fn session_completed(learner: &str, status: CompletionStatus) {
    tracing::info!(
        event = "session_completed",
        learner = %learner,
        status = ?status,
        "session completed"
    );
}

/// Log a store failure that did not block the transition.
pub fn persistence_degraded(learner: &str, operation: &str, error: &StorageError) {
    tracing::warn!(
        event = "persistence_degraded",
        learner = %learner,
        operation = %operation,
        error = %error,
        "store failure, continuing without persistence"
    );
}

/// Log a critique request that produced no critique.
pub fn feedback_unavailable(reason: &str) {
    tracing::warn!(
        event = "feedback_unavailable",
        reason = %reason,
        "sentence feedback unavailable"
    );
}
