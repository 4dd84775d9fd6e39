//! v001: attempts, preferences, remediated_sentences.

use rusqlite::Connection;

use conjuga_core::errors::StorageResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS attempts (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            learner_id    TEXT NOT NULL,
            verb          TEXT NOT NULL,
            tense         TEXT NOT NULL,
            pronoun_slot  INTEGER NOT NULL,
            user_answer   TEXT NOT NULL,
            is_correct    INTEGER NOT NULL,
            attempted_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_attempts_key
            ON attempts(learner_id, verb, tense, pronoun_slot);

        CREATE TABLE IF NOT EXISTS preferences (
            learner_id      TEXT NOT NULL,
            verb            TEXT NOT NULL,
            tense           TEXT NOT NULL,
            never_show      INTEGER NOT NULL DEFAULT 0,
            always_show     INTEGER NOT NULL DEFAULT 0,
            show_primarily  INTEGER NOT NULL DEFAULT 0,
            updated_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (learner_id, verb, tense)
        );

        CREATE TABLE IF NOT EXISTS remediated_sentences (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            learner_id    TEXT NOT NULL,
            verb          TEXT NOT NULL,
            tense         TEXT NOT NULL,
            pronoun_slot  INTEGER NOT NULL,
            correct_form  TEXT NOT NULL,
            sentence      TEXT NOT NULL,
            is_correct    INTEGER NOT NULL,
            recorded_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sentences_learner
            ON remediated_sentences(learner_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
