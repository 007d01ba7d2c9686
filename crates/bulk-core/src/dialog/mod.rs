//! Controller for one bulk action dialog lifetime.
//!
//! Ties together the confirmation gate, the runner and the presenter, and owns
//! the close contract: closing hands the caller the items that succeeded.
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use bulk_model::{BulkConfig, CompletionPolicy, DialogLabels, ItemKey, RunSnapshot, RunState};

use crate::{
    action::BulkAction,
    error::CoreError,
    gate::ConfirmationGate,
    host::{DialogHost, NoopHost},
    presenter::{ActionButton, Column, Pager, ProgressView, ResultPresenter, TableModel, TableView},
    runner::{BulkActionRunner, RunContext},
};


/// Receives the succeeded items when the dialog closes.
pub type CloseCallback<T> = Box<dyn FnOnce(Vec<T>) + Send>;

/// Stateful bulk action dialog.
///
/// Typical flow: build, optionally [`set_confirmed`](Self::set_confirmed),
/// [`submit`](Self::submit) an action, render from [`snapshot`](Self::snapshot)
/// or [`subscribe`](Self::subscribe), then [`close`](Self::close).
/// While `submit` runs the dialog is mutably borrowed, so it cannot be closed
/// mid-run; the run itself is never cancelled.
pub struct BulkActionDialog<T> {
    presenter: ResultPresenter,
    completion: CompletionPolicy,
    gate: ConfirmationGate,
    runner: BulkActionRunner<T>,
    table: TableModel<T>,
    pager: Pager,
    host: Arc<dyn DialogHost>,
    on_close: Option<CloseCallback<T>>,
    closed: bool,
}

impl<T> BulkActionDialog<T>
where
    T: Clone + Send + Sync,
{
    /// Build a dialog over `items`.
    ///
    /// Fails on invalid `config` or when `key_fn` is not unique over `items`.
    pub fn new<K>(
        items: Vec<T>,
        key_fn: K,
        labels: DialogLabels,
        config: BulkConfig,
    ) -> Result<Self, CoreError>
    where
        K: Fn(&T) -> ItemKey,
    {
        config.validate()?;

        let runner = BulkActionRunner::new(items, key_fn, config.concurrency)?;
        let table = TableModel::new(Arc::clone(runner.items()), Arc::clone(runner.keys()));
        let pager = Pager::new(runner.len(), config.per_page);
        let gate = ConfirmationGate::for_prompt(labels.confirm_prompt());

        Ok(Self {
            presenter: ResultPresenter::new(labels),
            completion: config.completion,
            gate,
            runner,
            table,
            pager,
            host: Arc::new(NoopHost),
            on_close: None,
            closed: false,
        })
    }

    /// Columns of the item listing shown before the run.
    pub fn with_columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.table = self.table.with_columns(columns);
        self
    }

    /// Columns shown next to the status column once the run started.
    pub fn with_error_columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.table = self.table.with_error_columns(columns);
        self
    }

    pub fn with_host(mut self, host: Arc<dyn DialogHost>) -> Self {
        self.host = host;
        self
    }

    pub fn with_context(mut self, ctx: RunContext) -> Self {
        self.runner = self.runner.with_context(ctx);
        self
    }

    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Vec<T>) + Send + 'static,
    {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn labels(&self) -> &DialogLabels {
        self.presenter.labels()
    }

    pub fn presenter(&self) -> &ResultPresenter {
        &self.presenter
    }

    pub fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }

    pub fn state(&self) -> RunState {
        self.runner.state()
    }

    pub fn snapshot(&self) -> RunSnapshot {
        self.runner.snapshot()
    }

    /// Progress observer for rendering while [`submit`](Self::submit) is running.
    pub fn subscribe(&self) -> watch::Receiver<RunSnapshot> {
        self.runner.subscribe()
    }

    /// Table data that can be moved into a rendering task.
    pub fn table_model(&self) -> TableModel<T> {
        self.table.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Tick or untick the confirmation checkbox. Returns `true` if applied.
    pub fn set_confirmed(&mut self, confirmed: bool) -> bool {
        self.gate.set_confirmed(confirmed, self.runner.state())
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.closed && self.gate.can_start(self.runner.state())
    }

    pub fn description(&self) -> Option<&str> {
        self.presenter.description(self.state())
    }

    pub fn confirmation(&self) -> Option<&str> {
        self.presenter.confirmation(&self.gate, self.state())
    }

    /// Progress bar; hidden (`None`) until the run starts.
    pub fn progress(&self) -> Option<ProgressView> {
        let snap = self.snapshot();
        (snap.state != RunState::Idle).then(|| self.presenter.progress(&snap))
    }

    pub fn buttons(&self) -> Vec<ActionButton> {
        self.presenter.buttons(&self.gate, self.state())
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.pager.set_per_page(per_page);
    }

    /// Current page of the item listing or, once started, the result table.
    pub fn table(&self) -> TableView {
        self.table
            .view(&self.snapshot(), &self.pager, &self.presenter)
    }

    /// Run `action` over every item.
    ///
    /// Resolves once every item settled. With [`CompletionPolicy::AutoClose`]
    /// and no failures, the dialog then waits the configured delay and closes
    /// itself before returning.
    pub async fn submit<A>(&mut self, action: &A) -> Result<RunSnapshot, CoreError>
    where
        A: BulkAction<T> + ?Sized,
    {
        if self.closed {
            return Err(CoreError::Closed);
        }
        if self.runner.state() != RunState::Idle {
            return Err(CoreError::AlreadyStarted);
        }
        if !self.gate.is_confirmed() {
            return Err(CoreError::NotConfirmed);
        }

        let snap = self.runner.run(action).await?;

        if let Some(delay) = self.completion.close_delay(snap.has_error) {
            debug!(delay_ms = delay.as_millis() as u64, "clean run, closing dialog");
            tokio::time::sleep(delay).await;
            self.close();
        }
        Ok(snap)
    }

    /// Dismiss the dialog.
    ///
    /// Hands the succeeded items (input order) to the close callback and
    /// returns them. Closing before a run yields an empty list; closing twice
    /// is a no-op returning an empty list.
    pub fn close(&mut self) -> Vec<T> {
        if self.closed {
            return Vec::new();
        }
        self.closed = true;

        let succeeded = self.runner.succeeded_items();
        info!(
            state = %self.runner.state(),
            succeeded = succeeded.len(),
            total = self.runner.len(),
            "bulk action dialog closed"
        );

        if let Some(on_close) = self.on_close.take() {
            on_close(succeeded.clone());
        }
        self.host.close_dialog();
        succeeded
    }
}
