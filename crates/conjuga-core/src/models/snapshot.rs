//! Point-in-time view of one learner's history and preferences.

use super::{AttemptMap, PreferenceFlags, PreferenceMap, PronounSlot, VerbTense};

/// Store snapshot consumed by selection and reporting.
#[derive(Debug, Clone, Default)]
pub struct MasterySnapshot {
    pub attempts: AttemptMap,
    pub preferences: PreferenceMap,
}

impl MasterySnapshot {
    pub fn new(attempts: AttemptMap, preferences: PreferenceMap) -> Self {
        Self {
            attempts,
            preferences,
        }
    }

    /// A pair is mastered iff every slot's latest attempt is correct.
    /// A slot with no attempt counts as not mastered.
    pub fn is_mastered(&self, pair: &VerbTense) -> bool {
        PronounSlot::ALL.iter().all(|slot| {
            self.attempts
                .get(&(pair.clone(), *slot))
                .is_some_and(|record| record.is_correct)
        })
    }

    /// Flags for a pair, defaulting to all-false.
    pub fn preference(&self, pair: &VerbTense) -> PreferenceFlags {
        self.preferences.get(pair).copied().unwrap_or_default()
    }
}
