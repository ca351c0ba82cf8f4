use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use tracing::trace;

use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::ports::pacer::Pacer;
use crate::controllers::interactive::ports::presenter::SortPresenterPort;
use crate::controllers::run_controller::{RunController, RunToken};
use crate::core::config::session_config::SessionConfig;
use crate::core::data::sort_array::SortArray;
use crate::core::metrics::tracker::MetricsTracker;

/// Everything the user sees. Only the live run may publish into it, and only
/// while holding the lock.
pub(super) struct Session {
    pub(super) array: SortArray,
    pub(super) metrics: MetricsTracker,
    pub(super) config: SessionConfig,
    pub(super) rng: StdRng,
}

pub(super) struct SharedState {
    pub(super) runs: RunController,
    pub(super) session: Mutex<Session>,
    pub(super) pending_run: Mutex<Option<RunToken>>,
    pub(super) wake: Condvar,
    pub(super) last_settled: Mutex<u64>,
    pub(super) settled: Condvar,
    pub(super) shutdown: AtomicBool,
    pub(super) presenter_port: Arc<dyn SortPresenterPort>,
    /// Held while presenting session state, taken before the session lock
    /// is released.
    pub(super) present_order: Mutex<()>,
    pub(super) pacer: Arc<dyn Pacer>,
}

impl SharedState {
    pub(super) fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    pub(super) fn is_live(&self, token: RunToken) -> bool {
        !self.shutdown.load(Ordering::Acquire) && !self.runs.is_cancelled(token)
    }

    pub(super) fn present(&self, event: SortEvent) {
        if let Err(err) = self.presenter_port.present(event) {
            trace!(error = %err, "presenter dropped event");
        }
    }

    /// Releases `session` and presents `events` before any state published
    /// after this guard can reach the presenter.
    pub(super) fn present_after<I>(&self, session: MutexGuard<'_, Session>, events: I)
    where
        I: IntoIterator<Item = SortEvent>,
    {
        let _order = lock(&self.present_order);
        drop(session);

        for event in events {
            self.present(event);
        }
    }

    pub(super) fn mark_settled(&self, token: RunToken) {
        let mut last = lock(&self.last_settled);
        *last = (*last).max(token.get());
        self.settled.notify_all();
    }
}

pub(super) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
