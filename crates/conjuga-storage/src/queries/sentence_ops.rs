//! Remediated sentences, append-only.

use rusqlite::{params, Connection};

use conjuga_core::errors::StorageResult;
use conjuga_core::models::RemediatedSentence;

use super::{parse_timestamp, slot_from_column, slot_to_column};
use crate::to_storage_err;

const TABLE: &str = "remediated_sentences";

pub fn insert_sentence(
    conn: &Connection,
    learner: &str,
    sentence: &RemediatedSentence,
) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO remediated_sentences
             (learner_id, verb, tense, pronoun_slot, correct_form, sentence, is_correct, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            learner,
            sentence.verb,
            sentence.tense,
            slot_to_column(sentence.pronoun_slot),
            sentence.correct_form,
            sentence.sentence,
            sentence.is_correct,
            sentence.recorded_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All sentences for a learner in insertion order.
pub fn load_sentences(conn: &Connection, learner: &str) -> StorageResult<Vec<RemediatedSentence>> {
    let mut stmt = conn
        .prepare(
            "SELECT verb, tense, pronoun_slot, correct_form, sentence, is_correct, recorded_at
             FROM remediated_sentences WHERE learner_id = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![learner], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, bool>(5)?,
                row.get::<_, String>(6)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut sentences = Vec::new();
    for row in rows {
        let (verb, tense, slot, correct_form, sentence, is_correct, recorded_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        sentences.push(RemediatedSentence {
            verb,
            tense,
            pronoun_slot: slot_from_column(TABLE, slot)?,
            correct_form,
            sentence,
            is_correct,
            recorded_at: parse_timestamp(TABLE, &recorded_at)?,
        });
    }
    Ok(sentences)
}
