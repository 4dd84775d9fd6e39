use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::VerbTense;

/// Preference flags per (verb, tense). Missing entries mean all-false.
pub type PreferenceMap = HashMap<VerbTense, PreferenceFlags>;

/// Learner-controlled visibility flags for one verb/tense pair.
///
/// `never_show` dominates everything; `always_show` only overrides
/// mastery-based exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceFlags {
    pub never_show: bool,
    pub always_show: bool,
    pub show_primarily: bool,
}
