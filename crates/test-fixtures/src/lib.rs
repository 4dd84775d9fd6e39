//! Shared test doubles for the conjuga workspace: in-memory and failing
//! stores, a canned feedback gateway, and small catalogs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use conjuga_catalog::Catalog;
use conjuga_core::errors::{GatewayError, StorageError, StorageResult};
use conjuga_core::models::{
    AttemptMap, AttemptRecord, Critique, PreferenceFlags, PreferenceMap, RemediatedSentence,
    VerbTense,
};
use conjuga_core::traits::{IFeedbackGateway, IMasteryStore};

/// Catalog holding only `falar/presente = [falo, fala, falamos, falam]`.
pub fn falar_catalog() -> Catalog {
    Catalog::from_toml(
        r#"
[tenses]
presente = "Presente do Indicativo"

[verbs.falar]
presente = ["falo", "fala", "falamos", "falam"]
"#,
    )
    .expect("falar catalog is valid")
}

/// Three regular verbs in two tenses.
pub fn small_catalog() -> Catalog {
    Catalog::from_toml(
        r#"
[tenses]
presente = "Presente do Indicativo"
preterito_perfeito = "Pretérito Perfeito do Indicativo"

[verbs.falar]
presente = ["falo", "fala", "falamos", "falam"]
preterito_perfeito = ["falei", "falou", "falamos", "falaram"]

[verbs.comer]
presente = ["como", "come", "comemos", "comem"]
preterito_perfeito = ["comi", "comeu", "comemos", "comeram"]

[verbs.partir]
presente = ["parto", "parte", "partimos", "partem"]
preterito_perfeito = ["parti", "partiu", "partimos", "partiram"]
"#,
    )
    .expect("small catalog is valid")
}

/// The bundled catalog.
pub fn builtin_catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog is valid")
}

/// Answers that are all correct for `pair` in `catalog`.
pub fn correct_answers(catalog: &Catalog, pair: &VerbTense) -> [String; 4] {
    catalog
        .get(&pair.verb, &pair.tense)
        .map(|item| item.forms.clone())
        .expect("pair exists in catalog")
}

fn guard<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── MemoryStore ───────────────────────────────────────────────────────────

#[derive(Default)]
struct LearnerData {
    attempts: Vec<AttemptRecord>,
    preferences: PreferenceMap,
    sentences: Vec<RemediatedSentence>,
}

/// In-memory `IMasteryStore`. Writes can be switched to fail on demand.
#[derive(Default)]
pub struct MemoryStore {
    learners: Mutex<HashMap<String, LearnerData>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write return `Unreachable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Full attempt history for a learner, oldest first.
    pub fn attempt_history(&self, learner: &str) -> Vec<AttemptRecord> {
        guard(&self.learners)
            .get(learner)
            .map(|d| d.attempts.clone())
            .unwrap_or_default()
    }

    fn write<F: FnOnce(&mut LearnerData)>(&self, learner: &str, f: F) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unreachable {
                reason: "writes disabled".into(),
            });
        }
        let mut learners = guard(&self.learners);
        f(learners.entry(learner.to_string()).or_default());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl IMasteryStore for MemoryStore {
    fn load_attempts(&self, learner: &str) -> StorageResult<AttemptMap> {
        let learners = guard(&self.learners);
        let mut latest = AttemptMap::new();
        if let Some(data) = learners.get(learner) {
            for record in &data.attempts {
                latest.insert(record.key(), record.clone());
            }
        }
        Ok(latest)
    }

    fn save_attempt(&self, learner: &str, record: &AttemptRecord) -> StorageResult<()> {
        self.write(learner, |d| d.attempts.push(record.clone()))
    }

    fn load_preferences(&self, learner: &str) -> StorageResult<PreferenceMap> {
        Ok(guard(&self.learners)
            .get(learner)
            .map(|d| d.preferences.clone())
            .unwrap_or_default())
    }

    fn save_preference(
        &self,
        learner: &str,
        verb: &str,
        tense: &str,
        flags: PreferenceFlags,
    ) -> StorageResult<()> {
        self.write(learner, |d| {
            d.preferences.insert(VerbTense::new(verb, tense), flags);
        })
    }

    fn save_remediated_sentence(
        &self,
        learner: &str,
        sentence: &RemediatedSentence,
    ) -> StorageResult<()> {
        self.write(learner, |d| d.sentences.push(sentence.clone()))
    }

    fn load_sentences(&self, learner: &str) -> StorageResult<Vec<RemediatedSentence>> {
        Ok(guard(&self.learners)
            .get(learner)
            .map(|d| d.sentences.clone())
            .unwrap_or_default())
    }
}

// ── FailingStore ──────────────────────────────────────────────────────────

/// `IMasteryStore` whose every call fails with `Unreachable`.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn err<T>() -> StorageResult<T> {
        Err(StorageError::Unreachable {
            reason: "store offline".into(),
        })
    }
}

impl IMasteryStore for FailingStore {
    fn load_attempts(&self, _learner: &str) -> StorageResult<AttemptMap> {
        Self::err()
    }

    fn save_attempt(&self, _learner: &str, _record: &AttemptRecord) -> StorageResult<()> {
        Self::err()
    }

    fn load_preferences(&self, _learner: &str) -> StorageResult<PreferenceMap> {
        Self::err()
    }

    fn save_preference(
        &self,
        _learner: &str,
        _verb: &str,
        _tense: &str,
        _flags: PreferenceFlags,
    ) -> StorageResult<()> {
        Self::err()
    }

    fn save_remediated_sentence(
        &self,
        _learner: &str,
        _sentence: &RemediatedSentence,
    ) -> StorageResult<()> {
        Self::err()
    }

    fn load_sentences(&self, _learner: &str) -> StorageResult<Vec<RemediatedSentence>> {
        Self::err()
    }
}

// ── StubGateway ───────────────────────────────────────────────────────────

/// Feedback gateway returning a canned result and counting calls.
pub struct StubGateway {
    response: Result<Critique, GatewayError>,
    calls: AtomicUsize,
}

impl StubGateway {
    pub fn ok(critique: Critique) -> Self {
        Self {
            response: Ok(critique),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: GatewayError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IFeedbackGateway for StubGateway {
    fn critique(&self, _sentence: &str, _target_form: &str) -> Result<Critique, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
