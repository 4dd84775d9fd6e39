//! Removal of abandoned sessions.

use chrono::Duration;

use crate::manager::SessionManager;

/// Remove sessions with no activity for longer than `inactivity_timeout`.
/// Returns the number of sessions removed.
pub fn cleanup_stale_sessions(manager: &SessionManager, inactivity_timeout: Duration) -> usize {
    let removed = manager
        .learners()
        .iter()
        .filter(|learner| manager.remove_if_idle_for(learner, inactivity_timeout))
        .count();

    if removed > 0 {
        tracing::info!(removed, "stale sessions removed");
    }
    removed
}
