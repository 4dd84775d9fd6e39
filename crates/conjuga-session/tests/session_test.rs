use std::sync::Arc;

use proptest::prelude::*;

use conjuga_core::config::SessionConfig;
use conjuga_core::errors::{ConjugaError, GatewayError};
use conjuga_core::models::{Critique, ExerciseError, PreferenceFlags, PronounSlot, VerbTense};
use conjuga_core::traits::IMasteryStore;
use conjuga_session::{
    drain_round, partition, AdvanceOutcome, CompletionStatus, DrillEngine, Phase,
};
use test_fixtures::{
    correct_answers, falar_catalog, small_catalog, FailingStore, MemoryStore, StubGateway,
};

const LEARNER: &str = "ana";

fn seeded() -> SessionConfig {
    SessionConfig {
        shuffle_seed: Some(42),
        ..Default::default()
    }
}

fn falar_engine() -> (DrillEngine, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let engine = DrillEngine::new(Arc::new(falar_catalog()), store.clone(), seeded());
    (engine, store)
}

fn answers(forms: [&str; 4]) -> [String; 4] {
    forms.map(String::from)
}

fn error(form: &str) -> ExerciseError {
    ExerciseError {
        verb: "falar".into(),
        tense: "presente".into(),
        pronoun_slot: PronounSlot::ThirdSingular,
        correct_form: form.into(),
        user_answer: "x".into(),
    }
}

// ── Scenario A: selection on a fresh learner ──────────────────────────────

#[test]
fn start_selects_the_only_pair() {
    let (engine, _) = falar_engine();
    let outcome = engine.start(LEARNER, 5).unwrap();
    assert_eq!(outcome.batch, vec![VerbTense::new("falar", "presente")]);
    assert!(outcome.warnings.is_empty());
    assert_eq!(engine.phase(LEARNER), Phase::Active(0));

    let prompt = engine.current_exercise(LEARNER).unwrap();
    assert_eq!(prompt.index, 0);
    assert_eq!(prompt.total, 1);
    assert_eq!(prompt.tense_name, "Presente do Indicativo");
    assert_eq!(prompt.pronouns, ["eu", "ele", "nós", "eles"]);
}

// ── Scenarios B, C, D: one miss drained through a sentence ────────────────

#[test]
fn single_miss_runs_through_sentence_remediation() {
    let (engine, store) = falar_engine();
    engine.start(LEARNER, 5).unwrap();

    // B
    let submitted = engine
        .submit_exercise(LEARNER, &answers(["falo", "errado", "falamos", "falam"]))
        .unwrap();
    let verdicts: Vec<bool> = submitted.results.iter().map(|r| r.is_correct).collect();
    assert_eq!(verdicts, vec![true, false, true, true]);
    assert_eq!(
        submitted.errors,
        vec![ExerciseError {
            verb: "falar".into(),
            tense: "presente".into(),
            pronoun_slot: PronounSlot::ThirdSingular,
            correct_form: "fala".into(),
            user_answer: "errado".into(),
        }]
    );
    assert_eq!(store.attempt_history(LEARNER).len(), 4);

    // C
    let advanced = engine.advance(LEARNER).unwrap();
    assert_eq!(
        advanced,
        AdvanceOutcome::RemediationPending {
            sentence_queue: 1,
            word_queue: 0
        }
    );
    let handle = engine.sessions().get(LEARNER).unwrap();
    {
        let session = handle.lock().unwrap();
        assert_eq!(session.phase(), Phase::RemediationPending);
        assert_eq!(session.sentence_queue(), submitted.errors.as_slice());
        assert!(session.word_queue().is_empty());
    }

    let prompt = engine.remediation_prompt(LEARNER).unwrap();
    assert_eq!(prompt.sentence_queue.len(), 1);
    assert_eq!(prompt.sentence_queue[0].pronoun, "ele");

    // D
    let round = engine
        .submit_remediation(LEARNER, &[], &["Ele fala português.".to_string()])
        .unwrap();
    assert!(round.results.sentences[0].is_correct);
    assert_eq!(round.remaining_sentences, 0);
    assert_eq!(round.remaining_words, 0);
    assert_eq!(round.phase, Phase::Complete);
    assert_eq!(round.completion, Some(CompletionStatus::Remediated));

    let sentences = engine.sentences(LEARNER).unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].sentence, "Ele fala português.");
    assert_eq!(sentences[0].correct_form, "fala");

    engine.reset(LEARNER).unwrap();
    assert_eq!(engine.phase(LEARNER), Phase::Idle);
}

#[test]
fn failed_sentence_keeps_the_round_open() {
    let (engine, store) = falar_engine();
    engine.start(LEARNER, 5).unwrap();
    engine
        .submit_exercise(LEARNER, &answers(["falo", "errado", "falamos", "falam"]))
        .unwrap();
    engine.advance(LEARNER).unwrap();

    let round = engine
        .submit_remediation(LEARNER, &[], &["Ele falava ontem".to_string()])
        .unwrap();
    assert_eq!(round.phase, Phase::RemediationPending);
    assert_eq!(round.remaining_sentences, 1);
    assert!(round.completion.is_none());
    assert!(store.load_sentences(LEARNER).unwrap().is_empty());

    // Punctuation glued to the form keeps it from being a whole token.
    let round = engine
        .submit_remediation(LEARNER, &[], &["Ele fala.".to_string()])
        .unwrap();
    assert_eq!(round.remaining_sentences, 1);
    assert!(!round.results.sentences[0].is_correct);

    let round = engine
        .submit_remediation(LEARNER, &[], &["fala".to_string()])
        .unwrap();
    assert!(round.is_complete());
}

#[test]
fn clean_batch_completes_on_advance() {
    let catalog = falar_catalog();
    let (engine, _) = falar_engine();
    let batch = engine.start(LEARNER, 5).unwrap().batch;
    engine
        .submit_exercise(LEARNER, &correct_answers(&catalog, &batch[0]))
        .unwrap();
    assert_eq!(
        engine.advance(LEARNER).unwrap(),
        AdvanceOutcome::Complete(CompletionStatus::AllCorrect)
    );
}

#[test]
fn overflow_errors_go_to_word_queue() {
    let catalog = small_catalog();
    let store = Arc::new(MemoryStore::new());
    let engine = DrillEngine::new(Arc::new(catalog), store, seeded());
    let batch = engine.start(LEARNER, 2).unwrap().batch;
    assert_eq!(batch.len(), 2);

    for _ in &batch {
        engine
            .submit_exercise(LEARNER, &answers(["", "", "", ""]))
            .unwrap();
        let _ = engine.advance(LEARNER).unwrap();
    }

    let handle = engine.sessions().get(LEARNER).unwrap();
    let session = handle.lock().unwrap();
    assert_eq!(session.collected_errors().len(), 8);
    assert_eq!(session.sentence_queue().len(), 5);
    assert_eq!(session.word_queue().len(), 3);
    assert_eq!(session.sentence_queue(), &session.collected_errors()[..5]);
}

#[test]
fn word_retries_drain_independently_of_sentences() {
    let catalog = small_catalog();
    let engine = DrillEngine::new(Arc::new(catalog), Arc::new(MemoryStore::new()), seeded());
    let batch = engine.start(LEARNER, 2).unwrap().batch;
    for _ in &batch {
        engine
            .submit_exercise(LEARNER, &answers(["", "", "", ""]))
            .unwrap();
        let _ = engine.advance(LEARNER).unwrap();
    }

    let prompt = engine.remediation_prompt(LEARNER).unwrap();
    let word_answers: Vec<String> = prompt
        .word_queue
        .iter()
        .map(|t| t.error.correct_form.clone())
        .collect();
    let round = engine
        .submit_remediation(LEARNER, &word_answers, &[])
        .unwrap();
    assert_eq!(round.remaining_words, 0);
    assert_eq!(round.remaining_sentences, 5);
    assert_eq!(round.phase, Phase::RemediationPending);
}

// ── Phase guards ──────────────────────────────────────────────────────────

#[test]
fn operations_out_of_phase_are_rejected() {
    let (engine, store) = falar_engine();

    let err = engine
        .submit_exercise(LEARNER, &answers(["falo", "fala", "falamos", "falam"]))
        .unwrap_err();
    assert!(matches!(err, ConjugaError::InvalidState { operation: "submit", .. }));
    assert!(engine.advance(LEARNER).is_err());
    assert!(engine.remediation_prompt(LEARNER).is_err());
    assert!(engine.submit_remediation(LEARNER, &[], &[]).is_err());
    assert!(engine.reset(LEARNER).is_err());
    assert!(engine.current_exercise(LEARNER).is_err());
    assert_eq!(engine.phase(LEARNER), Phase::Idle);
    assert_eq!(store.write_count(), 0);

    engine.start(LEARNER, 5).unwrap();
    let err = engine.start(LEARNER, 5).unwrap_err();
    assert!(matches!(err, ConjugaError::InvalidState { operation: "start", .. }));
    assert_eq!(engine.phase(LEARNER), Phase::Active(0));
}

#[test]
fn abandon_drops_session_in_any_phase() {
    let (engine, _) = falar_engine();
    engine.start(LEARNER, 5).unwrap();
    assert!(engine.abandon(LEARNER));
    assert!(!engine.abandon(LEARNER));
    assert_eq!(engine.phase(LEARNER), Phase::Idle);
    assert!(!engine.start(LEARNER, 5).unwrap().nothing_available());
}

// ── Mastery and preferences ───────────────────────────────────────────────

#[test]
fn mastery_flip_follows_latest_attempt() {
    let catalog = falar_catalog();
    let pair = VerbTense::new("falar", "presente");
    let (engine, _) = falar_engine();

    let run = |forms: [String; 4]| {
        engine.start(LEARNER, 5).unwrap();
        engine.submit_exercise(LEARNER, &forms).unwrap();
        let outcome = engine.advance(LEARNER).unwrap();
        if matches!(outcome, AdvanceOutcome::RemediationPending { .. }) {
            engine
                .submit_remediation(LEARNER, &[], &["Ele fala bem.".to_string()])
                .unwrap();
        }
        engine.reset(LEARNER).unwrap();
        engine.records(LEARNER).unwrap()[0].mastered
    };

    assert!(run(correct_answers(&catalog, &pair)));
    // Mastered and not forced back in: nothing left to drill.
    assert!(engine.start(LEARNER, 5).unwrap().nothing_available());
    assert_eq!(engine.phase(LEARNER), Phase::Idle);

    engine
        .update_preference(
            LEARNER,
            "falar",
            "presente",
            PreferenceFlags {
                always_show: true,
                ..Default::default()
            },
        )
        .unwrap();
    assert!(run(correct_answers(&catalog, &pair)));
    assert!(!run(answers(["falo", "errado", "falamos", "falam"])));
    assert!(run(correct_answers(&catalog, &pair)));
}

#[test]
fn records_cover_every_catalog_pair() {
    let engine = DrillEngine::new(
        Arc::new(small_catalog()),
        Arc::new(MemoryStore::new()),
        seeded(),
    );
    let rows = engine.records(LEARNER).unwrap();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| !r.attempted() && !r.mastered));
    assert!(rows
        .iter()
        .any(|r| r.tense_name == "Pretérito Perfeito do Indicativo"));
}

#[test]
fn preference_for_unknown_pair_is_not_found() {
    let (engine, store) = falar_engine();
    let err = engine
        .update_preference(LEARNER, "ser", "presente", PreferenceFlags::default())
        .unwrap_err();
    assert!(matches!(err, ConjugaError::NotFound { .. }));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn never_show_hides_pair_from_start() {
    let (engine, _) = falar_engine();
    engine
        .update_preference(
            LEARNER,
            "falar",
            "presente",
            PreferenceFlags {
                never_show: true,
                always_show: true,
                show_primarily: true,
            },
        )
        .unwrap();
    assert!(engine.start(LEARNER, 5).unwrap().nothing_available());
}

// ── Store failures ────────────────────────────────────────────────────────

#[test]
fn store_failures_become_warnings() {
    let engine = DrillEngine::new(Arc::new(falar_catalog()), Arc::new(FailingStore), seeded());

    let started = engine.start(LEARNER, 5).unwrap();
    assert_eq!(started.batch.len(), 1);
    assert_eq!(started.warnings.len(), 2);

    let submitted = engine
        .submit_exercise(LEARNER, &answers(["falo", "errado", "falamos", "falam"]))
        .unwrap();
    assert_eq!(submitted.warnings.len(), 4);
    assert_eq!(engine.phase(LEARNER), Phase::Submitted(0));

    engine.advance(LEARNER).unwrap();
    let round = engine
        .submit_remediation(LEARNER, &[], &["Ele fala bem.".to_string()])
        .unwrap();
    assert_eq!(round.warnings.len(), 1);
    assert!(round.is_complete());

    assert!(matches!(
        engine.records(LEARNER),
        Err(ConjugaError::StoreUnavailable(_))
    ));
    assert!(matches!(
        engine.sentences(LEARNER),
        Err(ConjugaError::StoreUnavailable(_))
    ));
}

#[test]
fn write_failure_mid_session_does_not_block() {
    let (engine, store) = falar_engine();
    engine.start(LEARNER, 5).unwrap();
    store.set_fail_writes(true);
    let submitted = engine
        .submit_exercise(LEARNER, &answers(["falo", "fala", "falamos", "falam"]))
        .unwrap();
    assert_eq!(submitted.warnings.len(), 4);
    assert!(submitted.all_correct());
    assert!(store.attempt_history(LEARNER).is_empty());
}

// ── Feedback ──────────────────────────────────────────────────────────────

#[test]
fn feedback_is_optional() {
    let (engine, _) = falar_engine();
    assert!(engine.sentence_feedback("Ele fala.", "fala").is_none());

    let failing = Arc::new(StubGateway::failing(GatewayError::RateLimited {
        retry_after_secs: Some(30),
    }));
    let engine = DrillEngine::new(Arc::new(falar_catalog()), Arc::new(MemoryStore::new()), seeded())
        .with_gateway(failing.clone());
    assert!(engine.sentence_feedback("Ele fala.", "fala").is_none());
    assert_eq!(failing.calls(), 1);

    let critique = Critique {
        is_target_language: true,
        overall_comment: Some("Muito bem".into()),
        ..Default::default()
    };
    let engine = DrillEngine::new(Arc::new(falar_catalog()), Arc::new(MemoryStore::new()), seeded())
        .with_gateway(Arc::new(StubGateway::ok(critique.clone())));
    assert_eq!(engine.sentence_feedback("Ele fala.", "fala"), Some(critique));
}

// ── Concurrency ───────────────────────────────────────────────────────────

#[test]
fn learners_run_in_parallel_and_one_learner_serializes() {
    let catalog = small_catalog();
    let engine = Arc::new(DrillEngine::new(
        Arc::new(catalog.clone()),
        Arc::new(MemoryStore::new()),
        seeded(),
    ));

    std::thread::scope(|scope| {
        for n in 0..8 {
            let engine = engine.clone();
            let catalog = &catalog;
            scope.spawn(move || {
                let learner = format!("learner-{n}");
                let batch = engine.start(&learner, 3).unwrap().batch;
                for pair in &batch {
                    engine
                        .submit_exercise(&learner, &correct_answers(catalog, pair))
                        .unwrap();
                    engine.advance(&learner).unwrap();
                }
                assert_eq!(engine.phase(&learner), Phase::Complete);
            });
        }
    });
    assert_eq!(engine.sessions().session_count(), 8);

    let starts: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = engine.clone();
                scope.spawn(move || engine.start("shared", 3).is_ok())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(starts.iter().filter(|ok| **ok).count(), 1);
}

// ── Cleanup ───────────────────────────────────────────────────────────────

#[test]
fn cleanup_keeps_recent_sessions() {
    let (engine, _) = falar_engine();
    engine.start(LEARNER, 5).unwrap();
    assert_eq!(engine.cleanup_stale_sessions(), 0);
    std::thread::sleep(std::time::Duration::from_millis(10));
    assert_eq!(
        conjuga_session::cleanup_stale_sessions(engine.sessions(), chrono::Duration::zero()),
        1
    );
    assert_eq!(engine.sessions().session_count(), 0);
}

// ── Properties ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_partition_preserves_order_and_caps_sentences(
        n in 0usize..20,
        limit in 0usize..8,
    ) {
        let errors: Vec<ExerciseError> = (0..n).map(|i| error(&format!("f{i}"))).collect();
        let (sentences, words) = partition(errors.clone(), limit);
        prop_assert!(sentences.len() <= limit);
        prop_assert_eq!(sentences.len(), n.min(limit));
        let rejoined: Vec<ExerciseError> = sentences.into_iter().chain(words).collect();
        prop_assert_eq!(rejoined, errors);
    }

    #[test]
    fn prop_drain_only_shrinks(
        word_hits in proptest::collection::vec(any::<bool>(), 0..8),
        sentence_hits in proptest::collection::vec(any::<bool>(), 0..6),
    ) {
        let words: Vec<ExerciseError> =
            (0..word_hits.len()).map(|i| error(&format!("w{i}"))).collect();
        let sentences: Vec<ExerciseError> =
            (0..sentence_hits.len()).map(|i| error(&format!("s{i}"))).collect();

        let word_answers: Vec<String> = words
            .iter()
            .zip(&word_hits)
            .map(|(e, hit)| if *hit { e.correct_form.to_uppercase() } else { "nope".into() })
            .collect();
        let sentence_answers: Vec<String> = sentences
            .iter()
            .zip(&sentence_hits)
            .map(|(e, hit)| if *hit { format!("Ele {} bem.", e.correct_form) } else { "nada".into() })
            .collect();

        let (rest_words, rest_sentences, results) =
            drain_round(words.clone(), sentences.clone(), &word_answers, &sentence_answers);

        prop_assert!(rest_words.len() <= words.len());
        prop_assert!(rest_sentences.len() <= sentences.len());
        prop_assert!(rest_words.iter().all(|e| words.contains(e)));
        prop_assert!(rest_sentences.iter().all(|e| sentences.contains(e)));
        prop_assert_eq!(rest_words.len(), word_hits.iter().filter(|h| !**h).count());
        prop_assert_eq!(rest_sentences.len(), sentence_hits.iter().filter(|h| !**h).count());
        prop_assert_eq!(results.passed() + results.failed(), words.len() + sentences.len());
    }
}
