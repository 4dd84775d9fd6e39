//! SessionManager: learner-keyed sessions via DashMap.
//!
//! Each session sits behind its own mutex so one learner's operations
//! serialize while different learners proceed in parallel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use chrono::Duration;
use dashmap::DashMap;

use crate::machine::Session;
use crate::phase::Phase;

pub type SessionHandle = Arc<Mutex<Session>>;

/// Thread-safe map from learner id to their session.
pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionHandle>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// The learner's session, created idle on first use.
    pub fn handle(&self, learner: &str) -> SessionHandle {
        self.sessions
            .entry(learner.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::new(learner))))
            .clone()
    }

    /// The learner's session if one exists.
    pub fn get(&self, learner: &str) -> Option<SessionHandle> {
        self.sessions.get(learner).map(|r| r.value().clone())
    }

    /// Phase of the learner's session; `Idle` when there is none.
    pub fn phase(&self, learner: &str) -> Phase {
        self.get(learner)
            .map(|handle| lock(&handle).phase())
            .unwrap_or(Phase::Idle)
    }

    pub fn remove(&self, learner: &str) -> Option<SessionHandle> {
        self.sessions.remove(learner).map(|(_, v)| v)
    }

    /// Remove the learner's session only if it has been idle for longer
    /// than `timeout`. The check and the removal happen under the map's
    /// shard lock, so a session replaced or touched meanwhile survives. A
    /// session locked by an in-flight operation counts as busy.
    pub fn remove_if_idle_for(&self, learner: &str, timeout: Duration) -> bool {
        self.sessions
            .remove_if(learner, |_, handle| match handle.try_lock() {
                Ok(session) => session.idle_duration() > timeout,
                Err(TryLockError::Poisoned(poisoned)) => {
                    poisoned.into_inner().idle_duration() > timeout
                }
                Err(TryLockError::WouldBlock) => false,
            })
            .is_some()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn learners(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock a session, recovering the guard from a poisoned mutex.
pub fn lock(handle: &SessionHandle) -> MutexGuard<'_, Session> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
