use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide sequence for run identifiers.
static RUN_SEQ: AtomicU64 = AtomicU64::new(1);

/// Build a human-readable run id used to correlate log lines of one run.
///
/// Format: `{action}-{seq:x}`.
pub(crate) fn make_run_id(action: &str) -> String {
    let seq = RUN_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{action}-{seq:x}")
}

#[cfg(test)]
mod tests {
    use super::make_run_id;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = make_run_id("delete");
        let b = make_run_id("delete");
        assert!(a.starts_with("delete-"));
        assert_ne!(a, b);
    }
}
