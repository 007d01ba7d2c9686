//! Bounded-concurrency fan-out of one action over a list of items.
//!
//! The run is driven by a single task: at most `concurrency` action futures
//! are polled at once and items are admitted in input order. Every settlement
//! is merged into the outcome map by that same task, then published as a new
//! [`RunSnapshot`] on a watch channel, so observers never see a torn state and
//! no lock guards the map.
mod context;
pub use context::RunContext;

mod id;

use std::{collections::HashSet, sync::Arc};

use futures::stream::{self, StreamExt};
use tokio::{sync::watch, time::Instant};
use tracing::{debug, info, instrument, trace, warn};

use bulk_model::{ItemKey, ModelError, Outcome, RunSnapshot, RunState};

use crate::{
    action::BulkAction,
    error::CoreError,
    metrics::ItemOutcome,
};

/// Stateful controller for a single bulk run.
///
/// Created `Idle`; [`BulkActionRunner::run`] moves it to `Running` and returns
/// once every item settled (`Completed`). A runner executes at most once.
pub struct BulkActionRunner<T> {
    items: Arc<[T]>,
    keys: Arc<[ItemKey]>,
    concurrency: usize,
    ctx: RunContext,
    tx: watch::Sender<RunSnapshot>,
}

impl<T> BulkActionRunner<T> {
    /// Build a runner over `items`.
    ///
    /// Fails if `key_fn` yields the same key twice or `concurrency` is zero.
    pub fn new<K>(items: Vec<T>, key_fn: K, concurrency: usize) -> Result<Self, CoreError>
    where
        K: Fn(&T) -> ItemKey,
    {
        if concurrency == 0 {
            return Err(ModelError::Invalid("concurrency must be at least 1".into()).into());
        }

        let mut seen = HashSet::with_capacity(items.len());
        let mut keys = Vec::with_capacity(items.len());
        for item in &items {
            let key = key_fn(item);
            if !seen.insert(key.clone()) {
                return Err(CoreError::DuplicateKey(key));
            }
            keys.push(key);
        }

        let (tx, _) = watch::channel(RunSnapshot::idle(items.len()));
        Ok(Self {
            items: items.into(),
            keys: keys.into(),
            concurrency,
            ctx: RunContext::default(),
            tx,
        })
    }

    /// Replace the run context (action name, metrics backend).
    pub fn with_context(mut self, ctx: RunContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Item keys in input order.
    pub fn keys(&self) -> &Arc<[ItemKey]> {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn state(&self) -> RunState {
        self.tx.borrow().state
    }

    /// Copy of the latest published snapshot.
    pub fn snapshot(&self) -> RunSnapshot {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<RunSnapshot> {
        self.tx.subscribe()
    }

    /// Items whose outcome is success, in input order.
    pub fn succeeded_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        let snap = self.tx.borrow();
        self.items
            .iter()
            .zip(self.keys.iter())
            .filter(|(_, key)| snap.outcomes.is_succeeded(key))
            .map(|(item, _)| item.clone())
            .collect()
    }
}

impl<T> BulkActionRunner<T>
where
    T: Send + Sync,
{
    /// Run `action` against every item and wait until all of them settled.
    ///
    /// Failures are recorded per item and never abort the batch. Returns the
    /// final snapshot, or [`CoreError::AlreadyStarted`] if this runner ran before.
    #[instrument(level = "debug", skip_all, fields(action = %self.ctx.action(), items = self.items.len()))]
    pub async fn run<A>(&mut self, action: &A) -> Result<RunSnapshot, CoreError>
    where
        A: BulkAction<T> + ?Sized,
    {
        let began = self.tx.send_if_modified(|snap| {
            if snap.state != RunState::Idle {
                return false;
            }
            snap.state = RunState::Running;
            true
        });
        if !began {
            return Err(CoreError::AlreadyStarted);
        }

        let run_id = id::make_run_id(self.ctx.action());
        let action_name = self.ctx.action();
        let metrics = self.ctx.metrics();
        let started = Instant::now();

        info!(run = %run_id, total = self.items.len(), concurrency = self.concurrency, "bulk run started");
        metrics.record_run_started(action_name, self.items.len());

        let mut settlements = stream::iter(self.items.iter().zip(self.keys.iter()))
            .map(move |(item, key)| async move {
                trace!(key = %key, "item admitted");
                let t0 = Instant::now();
                let result = action.run(item).await;
                (key, result, t0.elapsed())
            })
            .buffer_unordered(self.concurrency);

        while let Some((key, result, elapsed)) = settlements.next().await {
            let outcome = match result {
                Ok(()) => {
                    debug!(key = %key, "item succeeded");
                    Outcome::Succeeded
                }
                Err(rejection) => {
                    let message = rejection.failure_message();
                    warn!(key = %key, error = %message, "item failed");
                    Outcome::Failed(message)
                }
            };
            metrics.record_item_settled(
                action_name,
                ItemOutcome::from(&outcome),
                elapsed.as_millis() as u64,
            );
            self.merge(key, outcome);
        }
        drop(settlements);

        // An empty run never settles anything.
        self.tx.send_if_modified(|snap| {
            if snap.state == RunState::Completed {
                return false;
            }
            snap.state = RunState::Completed;
            true
        });

        let snap = self.snapshot();
        let failed = snap.outcomes.failed_count();
        metrics.record_run_completed(action_name, failed, started.elapsed().as_millis() as u64);
        if snap.has_error {
            warn!(run = %run_id, settled = snap.settled, failed, "bulk run completed with failures");
        } else {
            info!(run = %run_id, settled = snap.settled, "bulk run completed");
        }
        Ok(snap)
    }

    /// Merge one settlement into the published snapshot.
    fn merge(&self, key: &ItemKey, outcome: Outcome) {
        let failed = outcome.is_failure();
        self.tx.send_modify(|snap| {
            if !snap.outcomes.settle(key.clone(), outcome) {
                warn!(key = %key, "item settled twice; keeping first outcome");
                return;
            }
            snap.settled += 1;
            snap.has_error |= failed;
            if snap.settled == snap.total {
                snap.state = RunState::Completed;
            }
        });
    }
}
