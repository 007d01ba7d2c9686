//! Well-known values shared by every bulk run.

/// Maximum number of item actions in flight when nothing else is configured.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Delay before a dialog closes itself after a run without failures.
pub const AUTO_CLOSE_DELAY_MS: u64 = 1_500;

/// Rows per page in item and result tables.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Failure message recorded when a rejection carries no usable error message.
pub const UNKNOWN_ERROR: &str = "Unknown error";
