use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use bulk_core::{ItemOutcome, MetricsBackend};

const NAMESPACE: &str = "bulk";

/// Prometheus implementation of [`MetricsBackend`].
///
/// All labels are bounded: `action` comes from the caller's run context,
/// `outcome` is `success`/`failure`, `result` is `clean`/`with_failures`.
#[derive(Clone)]
pub struct PrometheusMetrics {
    runs_started: CounterVec,
    items: CounterVec,
    items_settled: CounterVec,
    item_duration: HistogramVec,
    runs_completed: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering its collectors in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let runs_started = CounterVec::new(
            Opts::new("runs_started_total", "Bulk runs started").namespace(NAMESPACE),
            &["action"],
        )?;
        registry.register(Box::new(runs_started.clone()))?;

        let items = CounterVec::new(
            Opts::new("items_total", "Items submitted to bulk runs").namespace(NAMESPACE),
            &["action"],
        )?;
        registry.register(Box::new(items.clone()))?;

        let items_settled = CounterVec::new(
            Opts::new("items_settled_total", "Items that reached a terminal outcome")
                .namespace(NAMESPACE),
            &["action", "outcome"],
        )?;
        registry.register(Box::new(items_settled.clone()))?;

        let item_duration = HistogramVec::new(
            HistogramOpts::new("item_duration_seconds", "Per-item action duration in seconds")
                .namespace(NAMESPACE)
                .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
            &["action"],
        )?;
        registry.register(Box::new(item_duration.clone()))?;

        let runs_completed = CounterVec::new(
            Opts::new("runs_completed_total", "Bulk runs completed").namespace(NAMESPACE),
            &["action", "result"],
        )?;
        registry.register(Box::new(runs_completed.clone()))?;

        Ok(Self {
            runs_started,
            items,
            items_settled,
            item_duration,
            runs_completed,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metric families for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_run_started(&self, action: &str, items: usize) {
        self.runs_started.with_label_values(&[action]).inc();
        self.items.with_label_values(&[action]).inc_by(items as f64);
    }

    fn record_item_settled(&self, action: &str, outcome: ItemOutcome, duration_ms: u64) {
        self.items_settled
            .with_label_values(&[action, outcome.as_label()])
            .inc();
        self.item_duration
            .with_label_values(&[action])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_run_completed(&self, action: &str, failed: usize, _duration_ms: u64) {
        let result = if failed == 0 { "clean" } else { "with_failures" };
        self.runs_completed
            .with_label_values(&[action, result])
            .inc();
    }
}
