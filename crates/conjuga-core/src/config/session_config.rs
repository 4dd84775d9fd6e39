use serde::{Deserialize, Serialize};

use super::defaults;

/// Selection and remediation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Drills per batch.
    pub batch_size: usize,
    /// Batch slots drawn from the primary pool first.
    pub primary_target: usize,
    /// Errors routed to sentence production; the rest go to word drills.
    pub sentence_practice_limit: usize,
    /// Sessions idle longer than this are dropped by cleanup.
    pub inactivity_timeout_secs: u64,
    /// Fixed shuffle seed. `None` seeds from the OS.
    pub shuffle_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            primary_target: defaults::DEFAULT_PRIMARY_TARGET,
            sentence_practice_limit: defaults::DEFAULT_SENTENCE_PRACTICE_LIMIT,
            inactivity_timeout_secs: defaults::DEFAULT_INACTIVITY_TIMEOUT_SECS,
            shuffle_seed: None,
        }
    }
}
