mod action;
pub use action::{BulkAction, Rejection};

mod error;
pub use error::CoreError;

mod gate;
pub use gate::ConfirmationGate;

mod host;
pub use host::{DialogHost, NoopHost};

mod metrics;
pub use metrics::{ItemOutcome, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};

mod runner;
pub use runner::{BulkActionRunner, RunContext};

mod presenter;
pub use presenter::{
    ActionButton, ButtonVariant, Column, Pager, ProgressVariant, ProgressView, ResultPresenter,
    StatusCell, TableModel, TableRow, TableView, Tone,
};

mod dialog;
pub use dialog::{BulkActionDialog, CloseCallback};

pub mod prelude {
    pub use crate::{
        BulkAction, BulkActionDialog, BulkActionRunner, Column, CoreError, DialogHost, Rejection,
        RunContext,
    };
    pub use bulk_model::{
        BulkConfig, CompletionPolicy, DialogLabels, ItemKey, ItemStatus, Outcome, OutcomeMap,
        RunSnapshot, RunState,
    };
}
