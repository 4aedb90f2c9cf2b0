//! # Observable Streams
//!
//! A single-slot holder of the latest `Resource<T>`, built on
//! `tokio::sync::watch`. `None` means nothing has been published yet.
//!
//! ```text
//! trigger ──begin()──► Ticket(n)
//!                         │
//!         use case runs   │
//!                         ▼
//! publish(Ticket(n), r) ──► slot = Some(r)   only if n is still the newest ticket
//!                                            and the owning scope is alive
//! ```
//!
//! Observers get a read-only view: [`Observable::subscribe`] and
//! [`Observable::current`]. Publishing is crate-private and only happens
//! through a view-model's scope.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use tokio::sync::watch;

use crate::core::resource::Resource;
use crate::presentation::scope::CancelToken;

/// What observers receive: the latest envelope, or `None` before the first publish.
pub type Snapshot<T> = Option<Resource<T>>;

/// Identifies one trigger on one stream. Only the newest ticket may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket(u64);

struct Slot<T> {
    sender: watch::Sender<Snapshot<T>>,
    issued: AtomicU64,
}

pub struct Observable<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observable<T> {
    pub fn new() -> Self {
        let (sender, _rx) = watch::channel(None);
        Self {
            slot: Arc::new(Slot {
                sender,
                issued: AtomicU64::new(0),
            }),
        }
    }

    /// A receiver that is notified on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.slot.sender.subscribe()
    }

    /// Claims the next ticket. Any completion holding an older ticket
    /// becomes stale and will be dropped.
    pub(crate) fn begin(&self) -> Ticket {
        Ticket(self.slot.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Overwrites the slot if `ticket` is still the newest and `token` is live.
    /// Returns whether the value was stored.
    pub(crate) fn publish(&self, ticket: Ticket, token: &CancelToken, value: Resource<T>) -> bool {
        let issued = &self.slot.issued;
        let stored = self.slot.sender.send_if_modified(|slot| {
            if token.is_cancelled() || issued.load(Ordering::SeqCst) != ticket.0 {
                return false;
            }
            *slot = Some(value);
            true
        });
        if !stored {
            debug!("Dropped publish for ticket {} (stale or cancelled)", ticket.0);
        }
        stored
    }

    /// Runs `fetch` under a fresh ticket and publishes what it returns.
    pub(crate) async fn refresh<F>(&self, token: &CancelToken, fetch: F) -> bool
    where
        F: Future<Output = Resource<T>>,
    {
        let ticket = self.begin();
        let resource = fetch.await;
        self.publish(ticket, token, resource)
    }
}

impl<T: Clone> Observable<T> {
    /// The latest envelope, cloned.
    pub fn current(&self) -> Snapshot<T> {
        self.slot.sender.borrow().clone()
    }

    /// Waits until the slot holds a non-loading envelope and returns it.
    ///
    /// Returns `None` if the stream can no longer change. A stream that is
    /// never triggered never settles.
    pub async fn settled(&self) -> Option<Resource<T>> {
        let mut rx = self.subscribe();
        let snapshot = rx
            .wait_for(|slot| matches!(slot, Some(r) if !r.is_loading()))
            .await
            .ok()?;
        snapshot.clone()
    }
}
