/// conjuga system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of drills in one session batch.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Slots of a batch reserved for `show_primarily` items before the
/// secondary pool is consulted.
pub const PRIMARY_POOL_TARGET: usize = 3;

/// Maximum number of collected errors routed to free-sentence production.
/// The remainder goes to word-level remediation.
pub const SENTENCE_PRACTICE_LIMIT: usize = 5;

/// Learner identity used when a front end has no notion of accounts.
pub const DEFAULT_LEARNER_ID: &str = "default_user";
