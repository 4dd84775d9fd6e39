// Single source of truth for all default values.

use crate::constants;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "conjuga.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Session ---
pub const DEFAULT_BATCH_SIZE: usize = constants::DEFAULT_BATCH_SIZE;
pub const DEFAULT_PRIMARY_TARGET: usize = constants::PRIMARY_POOL_TARGET;
pub const DEFAULT_SENTENCE_PRACTICE_LIMIT: usize = constants::SENTENCE_PRACTICE_LIMIT;
pub const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 86_400; // 24 hours

// --- Feedback ---
pub const DEFAULT_FEEDBACK_ENABLED: bool = false;
pub const DEFAULT_FEEDBACK_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_FEEDBACK_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_FEEDBACK_API_KEY_ENV: &str = "GOOGLE_GEMINI_API_KEY";
pub const DEFAULT_FEEDBACK_TIMEOUT_SECS: u64 = 30;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
