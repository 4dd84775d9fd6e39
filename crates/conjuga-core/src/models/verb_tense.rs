use serde::{Deserialize, Serialize};

/// Key of one drillable conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerbTense {
    pub verb: String,
    pub tense: String,
}

impl VerbTense {
    pub fn new(verb: impl Into<String>, tense: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            tense: tense.into(),
        }
    }
}

impl std::fmt::Display for VerbTense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.verb, self.tense)
    }
}
