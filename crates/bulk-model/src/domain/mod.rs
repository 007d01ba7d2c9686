mod constants;
pub use constants::{AUTO_CLOSE_DELAY_MS, DEFAULT_CONCURRENCY, DEFAULT_PER_PAGE, UNKNOWN_ERROR};

mod key;
pub use key::ItemKey;

mod outcome;
pub use outcome::{ItemStatus, Outcome, OutcomeMap};

mod snapshot;
pub use snapshot::{RunSnapshot, RunState};
