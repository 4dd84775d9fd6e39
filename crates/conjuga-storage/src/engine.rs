//! StorageEngine: owns the connection, runs migrations on open and
//! implements `IMasteryStore`.

use std::path::{Path, PathBuf};

use conjuga_core::config::StorageConfig;
use conjuga_core::errors::StorageResult;
use conjuga_core::models::{
    AttemptMap, AttemptRecord, PreferenceFlags, PreferenceMap, RemediatedSentence,
};
use conjuga_core::traits::IMasteryStore;

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::{attempt_ops, preference_ops, sentence_ops};

pub struct StorageEngine {
    writer: WriteConnection,
    db_path: Option<PathBuf>,
}

impl StorageEngine {
    /// Open (or create) a database file with the default busy timeout.
    pub fn open(path: &Path) -> StorageResult<Self> {
        Self::open_with(path, StorageConfig::default().busy_timeout_ms)
    }

    pub fn open_with(path: &Path, busy_timeout_ms: u32) -> StorageResult<Self> {
        let engine = Self {
            writer: WriteConnection::open(path, busy_timeout_ms)?,
            db_path: Some(path.to_path_buf()),
        };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "storage opened");
        Ok(engine)
    }

    pub fn from_config(config: &StorageConfig) -> StorageResult<Self> {
        Self::open_with(Path::new(&config.db_path), config.busy_timeout_ms)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let engine = Self {
            writer: WriteConnection::open_in_memory()?,
            db_path: None,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> StorageResult<()> {
        self.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn schema_version(&self) -> StorageResult<u32> {
        self.writer.with_conn_sync(migrations::current_version)
    }

    /// Rows in the learner's attempt history, superseded ones included.
    pub fn attempt_count(&self, learner: &str) -> StorageResult<i64> {
        self.writer
            .with_conn_sync(|conn| attempt_ops::count_attempts(conn, learner))
    }

    pub fn writer(&self) -> &WriteConnection {
        &self.writer
    }
}

impl IMasteryStore for StorageEngine {
    fn load_attempts(&self, learner: &str) -> StorageResult<AttemptMap> {
        self.writer
            .with_conn_sync(|conn| attempt_ops::latest_attempts(conn, learner))
    }

    fn save_attempt(&self, learner: &str, record: &AttemptRecord) -> StorageResult<()> {
        self.writer
            .with_conn_sync(|conn| attempt_ops::insert_attempt(conn, learner, record))
    }

    fn load_preferences(&self, learner: &str) -> StorageResult<PreferenceMap> {
        self.writer
            .with_conn_sync(|conn| preference_ops::load_preferences(conn, learner))
    }

    fn save_preference(
        &self,
        learner: &str,
        verb: &str,
        tense: &str,
        flags: PreferenceFlags,
    ) -> StorageResult<()> {
        self.writer.with_conn_sync(|conn| {
            preference_ops::upsert_preference(conn, learner, verb, tense, flags)
        })
    }

    fn save_remediated_sentence(
        &self,
        learner: &str,
        sentence: &RemediatedSentence,
    ) -> StorageResult<()> {
        self.writer
            .with_conn_sync(|conn| sentence_ops::insert_sentence(conn, learner, sentence))
    }

    fn load_sentences(&self, learner: &str) -> StorageResult<Vec<RemediatedSentence>> {
        self.writer
            .with_conn_sync(|conn| sentence_ops::load_sentences(conn, learner))
    }
}
