use serde::{Deserialize, Serialize};

/// A misspelled word and its correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingCorrection {
    pub error: String,
    pub correction: String,
}

/// Qualitative feedback on one produced sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Critique {
    /// False when the upstream judged the sentence not to be in the target
    /// language; the detail fields are then empty.
    pub is_target_language: bool,
    pub grammar_notes: String,
    pub spelling_errors: Vec<SpellingCorrection>,
    pub naturalness_note: String,
    pub suggestions: Vec<String>,
    pub overall_comment: Option<String>,
}
