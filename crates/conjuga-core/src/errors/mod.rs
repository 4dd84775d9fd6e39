//! Error taxonomy. One enum per subsystem, folded into [`ConjugaError`].

mod catalog_error;
mod gateway_error;
mod storage_error;

pub use catalog_error::CatalogError;
pub use gateway_error::GatewayError;
pub use storage_error::StorageError;

/// Result alias used across the workspace.
pub type ConjugaResult<T> = Result<T, ConjugaError>;

/// Result alias for store implementations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Top-level error returned by every public operation.
#[derive(Debug, thiserror::Error)]
pub enum ConjugaError {
    #[error("operation `{operation}` is not accepted in phase {phase}")]
    InvalidState {
        operation: &'static str,
        phase: String,
    },

    #[error("no conjugation for verb `{verb}` in tense `{tense}`")]
    NotFound { verb: String, tense: String },

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),

    #[error("feedback gateway: {0}")]
    Gateway(#[from] GatewayError),

    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl ConjugaError {
    /// Shorthand for building an [`ConjugaError::InvalidState`].
    pub fn invalid_state(operation: &'static str, phase: impl std::fmt::Display) -> Self {
        Self::InvalidState {
            operation,
            phase: phase.to_string(),
        }
    }

    /// Shorthand for building a [`ConjugaError::NotFound`].
    pub fn not_found(verb: &str, tense: &str) -> Self {
        Self::NotFound {
            verb: verb.to_string(),
            tense: tense.to_string(),
        }
    }
}
