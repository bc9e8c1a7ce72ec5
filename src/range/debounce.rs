//! Debounced range commits
//!
//! A slider emits a stream of intermediate values while it is dragged. Each
//! new value cancels the pending commit and schedules its own after the quiet
//! period; only a value that survives the whole period reaches the query.
//!
//! ```text
//! push(10,90)  push(20,90)  push(30,90)          (quiet period)
//!      ×            ×            └──────── 500ms ────────→ set_query("30 TO 90")
//! ```
//!
//! The pending commit is a task handle owned by the debouncer. Dropping the
//! debouncer cancels it.

use super::codec::encode_change;
use crate::query::QueryMutator;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Quiet period before a range change is committed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Trailing-edge debouncer for range slider changes
pub struct RangeDebouncer<M: QueryMutator + 'static> {
    mutator: Arc<M>,
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<M: QueryMutator + 'static> RangeDebouncer<M> {
    #[must_use]
    pub fn new(mutator: Arc<M>, quiet: Duration) -> Self {
        Self {
            mutator,
            quiet,
            pending: None,
        }
    }

    /// Debouncer with the default 500ms quiet period
    #[must_use]
    pub fn with_default_period(mutator: Arc<M>) -> Self {
        Self::new(mutator, DEFAULT_DEBOUNCE)
    }

    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Schedule `[low, high]`, superseding any pending value
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn push(&mut self, low: i64, high: i64) {
        self.cancel();

        let patch = encode_change(low, high);
        let mutator = Arc::clone(&self.mutator);
        let quiet = self.quiet;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            debug!(low, high, "committing range change");
            mutator.set_query(patch);
        }));
    }

    /// Drop the pending commit, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take()
            && !handle.is_finished()
        {
            debug!("superseding pending range commit");
            handle.abort();
        }
    }

    /// Whether a commit is scheduled and has not fired yet
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    #[must_use]
    pub fn mutator(&self) -> &Arc<M> {
        &self.mutator
    }
}

impl<M: QueryMutator + 'static> Drop for RangeDebouncer<M> {
    fn drop(&mut self) {
        self.cancel();
    }
}
