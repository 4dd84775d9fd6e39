//! # conjuga-catalog
//!
//! Immutable verb → tense → four-form table, loaded once at startup.
//!
//! ## Modules
//!
//! - `catalog`: `Catalog` lookup, pair enumeration, tense display names
//! - `item`: `ConjugationItem` and per-slot answer grading
//! - `loader`: TOML parsing and shape validation

pub mod catalog;
pub mod item;
mod loader;

pub use catalog::Catalog;
pub use item::ConjugationItem;
