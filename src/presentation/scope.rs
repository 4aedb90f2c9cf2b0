//! # View-Model Scope
//!
//! Every view-model owns one `ViewModelScope`. Triggers spawn their work
//! through it, and dropping it tears everything down:
//!
//! 1. the cancel signal flips to `true`, so no task publishes again;
//! 2. every tracked task is aborted at its next suspension point.
//!
//! The scope holds a runtime `Handle` rather than relying on an ambient
//! runtime, so trigger methods can be called from a thread that isn't
//! running Tokio (the UI thread).

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::core::resource::Resource;
use crate::presentation::observable::Observable;

/// Read side of a scope's cancel signal, handed to each task.
#[derive(Clone, Debug)]
pub struct CancelToken(watch::Receiver<bool>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    #[cfg(test)]
    pub(crate) fn live() -> Self {
        let (_tx, rx) = watch::channel(false);
        CancelToken(rx)
    }

    #[cfg(test)]
    pub(crate) fn cancelled() -> Self {
        let (_tx, rx) = watch::channel(true);
        CancelToken(rx)
    }
}

pub struct ViewModelScope {
    runtime: Handle,
    cancel_tx: watch::Sender<bool>,
    tasks: Mutex<Vec<AbortHandle>>,
}

impl ViewModelScope {
    pub fn new(runtime: Handle) -> Self {
        let (cancel_tx, _rx) = watch::channel(false);
        Self {
            runtime,
            cancel_tx,
            tasks: Mutex::new(Vec::new()),
        }
    }

    // A panicking task can't leave the list half-updated, so poison is ignored
    fn tasks(&self) -> MutexGuard<'_, Vec<AbortHandle>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn token(&self) -> CancelToken {
        CancelToken(self.cancel_tx.subscribe())
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }

    /// Number of tasks spawned through this scope that haven't finished.
    pub fn active_tasks(&self) -> usize {
        self.tasks().iter().filter(|h| !h.is_finished()).count()
    }

    /// Spawns `task` on the scope's runtime. Does nothing once cancelled.
    pub(crate) fn launch<F, Fut>(&self, task: F)
    where
        F: FnOnce(CancelToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.is_cancelled() {
            debug!("Scope cancelled, not launching task");
            return;
        }

        let handle = self.runtime.spawn(task(self.token()));

        let mut tasks = self.tasks();
        tasks.retain(|h| !h.is_finished());
        tasks.push(handle.abort_handle());
    }

    /// Runs `fetch` and publishes its envelope to `stream`, once.
    ///
    /// The ticket is claimed here, on the caller's thread, so the order of
    /// triggers decides which answer survives, not the order tasks get polled.
    pub(crate) fn launch_fetch<T, Fut>(&self, stream: &Observable<T>, fetch: Fut)
    where
        T: Send + Sync + 'static,
        Fut: Future<Output = Resource<T>> + Send + 'static,
    {
        if self.is_cancelled() {
            debug!("Scope cancelled, not launching fetch");
            return;
        }

        let ticket = stream.begin();
        let stream = stream.clone();
        self.launch(move |token| async move {
            let resource = fetch.await;
            stream.publish(ticket, &token, resource);
        });
    }

    /// Publishes `loading(None)` to `stream`, then whatever `work` resolves to.
    /// Both publishes share one ticket, so a newer trigger supersedes both.
    pub(crate) fn launch_with_progress<T, F, Fut>(&self, stream: &Observable<T>, work: F)
    where
        T: Send + Sync + 'static,
        F: FnOnce(CancelToken) -> Fut,
        Fut: Future<Output = Resource<T>> + Send + 'static,
    {
        if self.is_cancelled() {
            debug!("Scope cancelled, not launching task");
            return;
        }

        let ticket = stream.begin();
        stream.publish(ticket, &self.token(), Resource::loading(None));

        let stream = stream.clone();
        self.launch(move |token| {
            let work = work(token.clone());
            async move {
                let resource = work.await;
                stream.publish(ticket, &token, resource);
            }
        });
    }

    /// Publishes `loading(None)` to `status`, runs `update`, then publishes
    /// `success_empty()`. No error state is reachable on this path.
    ///
    /// An empty `id` is a silent no-op for observers: nothing is spawned and
    /// `status` keeps its last value. Returns whether the update was started.
    pub(crate) fn launch_update<T, F, Fut>(&self, status: &Observable<T>, id: &str, update: F) -> bool
    where
        T: Send + Sync + 'static,
        F: FnOnce(CancelToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if id.is_empty() {
            warn!("Update requested with an empty id, ignoring");
            return false;
        }
        if self.is_cancelled() {
            debug!("Scope cancelled, not starting update for {}", id);
            return false;
        }

        self.launch_with_progress(status, move |token| {
            let update = update(token);
            async move {
                update.await;
                Resource::success_empty()
            }
        });
        true
    }

    /// Flips the cancel signal and aborts every tracked task.
    pub fn cancel(&self) {
        self.cancel_tx.send_replace(true);
        let mut tasks = self.tasks();
        let count = tasks.len();
        for handle in tasks.drain(..) {
            handle.abort();
        }
        if count > 0 {
            debug!("Scope cancelled, aborted {} task(s)", count);
        }
    }
}

impl Drop for ViewModelScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
