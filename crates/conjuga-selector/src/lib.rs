//! # conjuga-selector
//!
//! Decides which verb/tense drills go into a new session batch.
//!
//! Pairs flagged `never_show` are dropped outright. The rest are split into
//! a primary pool (`show_primarily`) and a secondary pool, each shuffled,
//! and a batch is drawn with up to `primary_target` slots from primary.

pub mod draw;
pub mod pools;
pub mod selector;

pub use draw::draw_batch;
pub use pools::{build_pools, Pools};
pub use selector::ExerciseSelector;
