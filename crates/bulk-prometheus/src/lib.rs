//! Prometheus metrics backend for bulk action runs.
//!
//! [`PrometheusMetrics`] implements [`bulk_core::MetricsBackend`]; inject it via
//! [`bulk_core::RunContext`] and expose [`PrometheusMetrics::gather`] from
//! whatever HTTP endpoint the host application already serves.
//!
//! ```rust
//! use std::sync::Arc;
//! use bulk_core::RunContext;
//! use bulk_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let ctx = RunContext::new("delete-template", Arc::new(metrics.clone()));
//! # let _ = ctx;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `bulk_runs_started_total{action}` - Counter
//! - `bulk_items_total{action}` - Counter of items submitted to runs
//! - `bulk_items_settled_total{action, outcome}` - Counter
//! - `bulk_item_duration_seconds{action}` - Histogram
//! - `bulk_runs_completed_total{action, result}` - Counter, `result` is `clean` or `with_failures`
mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
