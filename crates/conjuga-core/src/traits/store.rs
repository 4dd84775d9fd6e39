use crate::errors::StorageResult;
use crate::models::{AttemptMap, AttemptRecord, PreferenceFlags, PreferenceMap, RemediatedSentence};

/// Per-learner persistence of attempt history, preference flags and
/// remediated sentences.
///
/// Calls are synchronous and bounded; implementations must not retry
/// internally. Every method is keyed by an opaque learner identity.
pub trait IMasteryStore: Send + Sync {
    /// Latest attempt per (verb, tense, slot). Older history is not returned.
    fn load_attempts(&self, learner: &str) -> StorageResult<AttemptMap>;

    /// Append one attempt to the learner's history.
    fn save_attempt(&self, learner: &str, record: &AttemptRecord) -> StorageResult<()>;

    /// Flags per (verb, tense). Pairs without an entry use defaults.
    fn load_preferences(&self, learner: &str) -> StorageResult<PreferenceMap>;

    /// Replace the flags for one pair.
    fn save_preference(
        &self,
        learner: &str,
        verb: &str,
        tense: &str,
        flags: PreferenceFlags,
    ) -> StorageResult<()>;

    /// Append one remediated sentence.
    fn save_remediated_sentence(
        &self,
        learner: &str,
        sentence: &RemediatedSentence,
    ) -> StorageResult<()>;

    /// All remediated sentences for a learner, oldest first.
    fn load_sentences(&self, learner: &str) -> StorageResult<Vec<RemediatedSentence>>;
}
