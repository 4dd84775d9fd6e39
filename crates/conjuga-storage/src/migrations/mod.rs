//! Versioned schema migrations. Applied versions are recorded in
//! `schema_version`; each runs at most once, in order.

mod v001_initial_schema;

use rusqlite::{params, Connection};

use conjuga_core::errors::{StorageError, StorageResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> StorageResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_initial_schema::migrate)];

/// Latest schema version this build knows.
pub const LATEST_VERSION: u32 = 1;

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> StorageResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every pending migration. Returns how many ran.
pub fn run_migrations(conn: &Connection) -> StorageResult<usize> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;

    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let failed = |reason: String| StorageError::MigrationFailed { version, reason };

        conn.execute_batch("BEGIN")
            .map_err(|e| failed(e.to_string()))?;
        let result = migrate(conn).and_then(|()| {
            conn.execute("INSERT INTO schema_version (version) VALUES (?1)", params![version])
                .map(|_| ())
                .map_err(|e| to_storage_err(e.to_string()))
        });
        match result {
            Ok(()) => {
                conn.execute_batch("COMMIT")
                    .map_err(|e| failed(e.to_string()))?;
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK");
                return Err(failed(e.to_string()));
            }
        }

        tracing::info!(version, "schema migration applied");
        applied += 1;
    }

    Ok(applied)
}
