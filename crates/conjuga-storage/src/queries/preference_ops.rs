//! Preference flags, one row per (learner, verb, tense).

use rusqlite::{params, Connection};

use conjuga_core::errors::StorageResult;
use conjuga_core::models::{PreferenceFlags, PreferenceMap, VerbTense};

use crate::to_storage_err;

pub fn upsert_preference(
    conn: &Connection,
    learner: &str,
    verb: &str,
    tense: &str,
    flags: PreferenceFlags,
) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO preferences (learner_id, verb, tense, never_show, always_show, show_primarily)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(learner_id, verb, tense) DO UPDATE SET
             never_show = excluded.never_show,
             always_show = excluded.always_show,
             show_primarily = excluded.show_primarily,
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![
            learner,
            verb,
            tense,
            flags.never_show,
            flags.always_show,
            flags.show_primarily,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn load_preferences(conn: &Connection, learner: &str) -> StorageResult<PreferenceMap> {
    let mut stmt = conn
        .prepare(
            "SELECT verb, tense, never_show, always_show, show_primarily
             FROM preferences WHERE learner_id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![learner], |row| {
            Ok((
                VerbTense::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?),
                PreferenceFlags {
                    never_show: row.get(2)?,
                    always_show: row.get(3)?,
                    show_primarily: row.get(4)?,
                },
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<PreferenceMap, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
