//! # conjuga-core
//!
//! Foundation crate for the conjuga drill system.
//! Defines the shared data model, the store and gateway traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ConjugaConfig;
pub use errors::{ConjugaError, ConjugaResult};
pub use models::{
    AttemptRecord, ExerciseError, MasterySnapshot, PreferenceFlags, PronounSlot,
    RemediatedSentence, VerbTense,
};
