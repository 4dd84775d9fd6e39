/// Persistence-layer errors. Always non-fatal for the session machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt record in {table}: {details}")]
    CorruptRecord { table: String, details: String },

    #[error("store unreachable: {reason}")]
    Unreachable { reason: String },
}
