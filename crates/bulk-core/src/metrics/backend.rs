use std::sync::Arc;

use bulk_model::Outcome;

/// Settlement classification for metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Success,
    Failure,
}

impl ItemOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            ItemOutcome::Success => "success",
            ItemOutcome::Failure => "failure",
        }
    }
}

impl From<&Outcome> for ItemOutcome {
    fn from(o: &Outcome) -> Self {
        match o {
            Outcome::Succeeded => ItemOutcome::Success,
            Outcome::Failed(_) => ItemOutcome::Failure,
        }
    }
}

/// Backend metrics collection interface.
///
/// `action` is the bounded action name from [`crate::RunContext`] (e.g. `"delete-template"`).
pub trait MetricsBackend: Send + Sync + 'static {
    /// Called once when a run leaves `Idle`.
    fn record_run_started(&self, action: &str, items: usize);
    /// Called for every settled item with the time its action took.
    fn record_item_settled(&self, action: &str, outcome: ItemOutcome, duration_ms: u64);
    /// Called once when every item settled.
    fn record_run_completed(&self, action: &str, failed: usize, duration_ms: u64);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
