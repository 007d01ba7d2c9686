use std::fmt;

use serde::{Deserialize, Serialize};

use super::OutcomeMap;

/// Lifecycle of a single bulk run.
///
/// `Idle -> Running -> Completed`; there is no way back and no cancelled state.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Point-in-time view of a run, replaced wholesale after every settlement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub state: RunState,
    pub outcomes: OutcomeMap,
    /// Items that reached success or failure.
    pub settled: usize,
    /// Items in the run.
    pub total: usize,
    /// Sticky: set by the first failure, never cleared.
    pub has_error: bool,
}

impl RunSnapshot {
    /// Snapshot of a run over `total` items that has not started.
    pub fn idle(total: usize) -> Self {
        Self {
            state: RunState::Idle,
            outcomes: OutcomeMap::new(),
            settled: 0,
            total,
            has_error: false,
        }
    }

    /// Fraction of settled items in `[0.0, 1.0]`. An empty run counts as done.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.settled as f64 / self.total as f64
    }

    /// `true` once every item settled.
    pub fn all_settled(&self) -> bool {
        self.settled == self.total
    }

    pub fn is_completed(&self) -> bool {
        self.state == RunState::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_snapshot_is_empty() {
        let snap = RunSnapshot::idle(4);
        assert_eq!(snap.state, RunState::Idle);
        assert!(snap.outcomes.is_empty());
        assert_eq!(snap.progress(), 0.0);
        assert!(!snap.has_error);
    }

    #[test]
    fn progress_is_settled_over_total() {
        let mut snap = RunSnapshot::idle(4);
        snap.settled = 3;
        assert_eq!(snap.progress(), 0.75);
        assert!(!snap.all_settled());
    }

    #[test]
    fn empty_run_counts_as_done() {
        let snap = RunSnapshot::idle(0);
        assert_eq!(snap.progress(), 1.0);
        assert!(snap.all_settled());
    }

    #[test]
    fn state_display_is_lowercase() {
        assert_eq!(RunState::Completed.to_string(), "completed");
    }
}
