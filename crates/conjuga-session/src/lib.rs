//! # conjuga-session
//!
//! One learner's drill run, from batch selection to the end of remediation.
//!
//! ## Modules
//!
//! - `phase`: `Phase`, the tagged state of a run
//! - `machine`: `Session`, the transition functions over `Phase`
//! - `remediation`: error partitioning and the pure drain step
//! - `manager`: `SessionManager`, learner-keyed sessions behind per-learner locks
//! - `engine`: `DrillEngine`, the facade wiring catalog, selector, store and gateway
//! - `cleanup`: removal of abandoned sessions
//! - `events`: named structured log events

pub mod cleanup;
pub mod engine;
pub mod events;
pub mod machine;
pub mod manager;
pub mod outcome;
pub mod phase;
pub mod remediation;

pub use cleanup::cleanup_stale_sessions;
pub use engine::DrillEngine;
pub use machine::Session;
pub use manager::SessionManager;
pub use outcome::{
    AdvanceOutcome, CompletionStatus, ExercisePrompt, PersistenceWarning, RecordRow,
    RemediationOutcome, RemediationPrompt, RemediationTask, StartOutcome, SubmitOutcome,
};
pub use phase::Phase;
pub use remediation::{drain_round, partition, sentence_contains_form, RoundResults};
