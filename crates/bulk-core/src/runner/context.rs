use std::fmt;

use crate::metrics::MetricsHandle;

/// Default action name used in logs and metric labels.
const DEFAULT_ACTION: &str = "bulk-action";

/// Shared context of a bulk run: what the action is called and where metrics go.
#[derive(Clone)]
pub struct RunContext {
    action: String,
    metrics: MetricsHandle,
}

impl RunContext {
    /// Create a new run context with the given params.
    ///
    /// `action` should be a short, bounded name (it becomes a metric label).
    pub fn new(action: impl Into<String>, metrics: MetricsHandle) -> Self {
        Self {
            action: action.into(),
            metrics,
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Get a reference to the metrics backend handle.
    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    /// Replace the action name and return updated context.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Replace the metrics backend and return updated context.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            action: DEFAULT_ACTION.to_string(),
            metrics: crate::metrics::noop_metrics(),
        }
    }
}

impl fmt::Debug for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("action", &self.action)
            .field("metrics", &"<handle>")
            .finish()
    }
}

impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunContext(action={})", self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::RunContext;
    use crate::metrics::{ItemOutcome, noop_metrics};

    #[test]
    fn default_context_uses_generic_action_name() {
        let ctx = RunContext::default();
        assert_eq!(ctx.action(), "bulk-action");
    }

    #[test]
    fn with_action_replaces_name() {
        let ctx = RunContext::new("delete-host", noop_metrics()).with_action("delete-template");
        assert_eq!(ctx.action(), "delete-template");
    }

    #[test]
    fn display_includes_action() {
        let ctx = RunContext::new("relaunch-job", noop_metrics());
        assert_eq!(ctx.to_string(), "RunContext(action=relaunch-job)");
    }

    #[test]
    fn metrics_handle_can_be_cloned() {
        let ctx = RunContext::default().with_metrics(noop_metrics());
        let handle = ctx.metrics().clone();

        handle.record_run_started(ctx.action(), 3);
        handle.record_item_settled(ctx.action(), ItemOutcome::Success, 12);
        handle.record_run_completed(ctx.action(), 0, 40);
    }
}
