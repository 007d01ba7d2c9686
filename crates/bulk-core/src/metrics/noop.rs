use crate::metrics::backend::{ItemOutcome, MetricsBackend};

/// Metrics backend that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_run_started(&self, _: &str, _: usize) {}

    #[inline(always)]
    fn record_item_settled(&self, _: &str, _: ItemOutcome, _: u64) {}

    #[inline(always)]
    fn record_run_completed(&self, _: &str, _: usize, _: u64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }
}
