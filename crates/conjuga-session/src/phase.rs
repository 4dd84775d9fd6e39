use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a drill run stands. Index payloads point into the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "index", rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Active(usize),
    Submitted(usize),
    AwaitingRemediationSplit,
    RemediationPending,
    RemediationActive,
    RemediationSubmitted,
    Complete,
}

impl Phase {
    /// Batch position while drilling.
    pub fn cursor(self) -> Option<usize> {
        match self {
            Phase::Active(i) | Phase::Submitted(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_remediating(self) -> bool {
        matches!(
            self,
            Phase::AwaitingRemediationSplit
                | Phase::RemediationPending
                | Phase::RemediationActive
                | Phase::RemediationSubmitted
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => f.write_str("idle"),
            Phase::Active(i) => write!(f, "active({i})"),
            Phase::Submitted(i) => write!(f, "submitted({i})"),
            Phase::AwaitingRemediationSplit => f.write_str("awaiting_remediation_split"),
            Phase::RemediationPending => f.write_str("remediation_pending"),
            Phase::RemediationActive => f.write_str("remediation_active"),
            Phase::RemediationSubmitted => f.write_str("remediation_submitted"),
            Phase::Complete => f.write_str("complete"),
        }
    }
}
