/// Errors raised while loading a conjugation catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("{verb}/{tense} has {count} forms, expected {expected}")]
    WrongFormCount {
        verb: String,
        tense: String,
        count: usize,
        expected: usize,
    },

    #[error("{verb} uses tense `{tense}` which has no display name")]
    UnknownTense { verb: String, tense: String },

    #[error("catalog contains no verbs")]
    Empty,
}
