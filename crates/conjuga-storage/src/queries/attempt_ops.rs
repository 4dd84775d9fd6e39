//! Append-only attempt history and the latest-per-slot view.

use rusqlite::{params, Connection};

use conjuga_core::errors::StorageResult;
use conjuga_core::models::{AttemptMap, AttemptRecord};

use super::{parse_timestamp, slot_from_column, slot_to_column};
use crate::to_storage_err;

const TABLE: &str = "attempts";

pub fn insert_attempt(conn: &Connection, learner: &str, record: &AttemptRecord) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO attempts (learner_id, verb, tense, pronoun_slot, user_answer, is_correct, attempted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            learner,
            record.verb,
            record.tense,
            slot_to_column(record.pronoun_slot),
            record.user_answer,
            record.is_correct,
            record.timestamp.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Newest row per (verb, tense, slot). The highest row id wins, so
/// insertion order decides even when timestamps go backwards.
pub fn latest_attempts(conn: &Connection, learner: &str) -> StorageResult<AttemptMap> {
    let mut stmt = conn
        .prepare(
            "SELECT verb, tense, pronoun_slot, user_answer, is_correct, attempted_at
             FROM attempts
             WHERE id IN (
                 SELECT MAX(id) FROM attempts
                 WHERE learner_id = ?1
                 GROUP BY verb, tense, pronoun_slot
             )",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![learner], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut latest = AttemptMap::new();
    for row in rows {
        let (verb, tense, slot, user_answer, is_correct, attempted_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let record = AttemptRecord {
            verb,
            tense,
            pronoun_slot: slot_from_column(TABLE, slot)?,
            user_answer,
            is_correct,
            timestamp: parse_timestamp(TABLE, &attempted_at)?,
        };
        latest.insert(record.key(), record);
    }
    Ok(latest)
}

/// Total rows stored for a learner, history included.
pub fn count_attempts(conn: &Connection, learner: &str) -> StorageResult<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM attempts WHERE learner_id = ?1",
        params![learner],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
