//! # conjuga-storage
//!
//! SQLite-backed [`IMasteryStore`](conjuga_core::traits::IMasteryStore).
//!
//! ## Modules
//!
//! - `engine`: `StorageEngine`, the trait implementation
//! - `pool`: the single serialized write connection and its pragmas
//! - `migrations`: versioned schema, tracked in `schema_version`
//! - `queries`: one module of SQL per table

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use conjuga_core::errors::StorageError;

/// Wrap a SQLite failure message.
pub(crate) fn to_storage_err(message: String) -> StorageError {
    StorageError::SqliteError { message }
}

/// A row that decoded to something the model cannot hold.
pub(crate) fn corrupt(table: &str, details: impl Into<String>) -> StorageError {
    StorageError::CorruptRecord {
        table: table.to_string(),
        details: details.into(),
    }
}
