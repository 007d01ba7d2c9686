mod domain;
pub use domain::{AUTO_CLOSE_DELAY_MS, DEFAULT_CONCURRENCY, DEFAULT_PER_PAGE, UNKNOWN_ERROR};
pub use domain::{ItemKey, ItemStatus, Outcome, OutcomeMap, RunSnapshot, RunState};

mod error;
pub use error::{ModelError, ModelResult};

mod spec;
pub use spec::{BulkConfig, DialogLabels};

mod strategy;
pub use strategy::CompletionPolicy;
