//! SQL per table.

pub mod attempt_ops;
pub mod preference_ops;
pub mod sentence_ops;

use chrono::{DateTime, Utc};

use conjuga_core::errors::StorageResult;
use conjuga_core::models::PronounSlot;

use crate::corrupt;

pub(crate) fn slot_from_column(table: &str, raw: i64) -> StorageResult<PronounSlot> {
    usize::try_from(raw)
        .ok()
        .and_then(PronounSlot::from_index)
        .ok_or_else(|| corrupt(table, format!("pronoun_slot {raw} out of range")))
}

pub(crate) fn slot_to_column(slot: PronounSlot) -> i64 {
    slot.index() as i64
}

pub(crate) fn parse_timestamp(table: &str, raw: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| corrupt(table, format!("bad timestamp {raw:?}: {e}")))
}
