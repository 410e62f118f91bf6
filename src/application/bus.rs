//! Publish-subscribe registry for audit events.
//!
//! One broken sink (say, an unreachable remote endpoint) must never delay or
//! corrupt delivery to the others, so every publish fans out to each
//! subscribed observer on its own task. The price is a lossy aggregate
//! return value: one error stands in for however many observers actually
//! failed, and callers must read it as "at least one observer failed".

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use tokio_util::sync::CancellationToken;

use crate::domain::event::Event;
use crate::domain::observer::Observer;
use crate::error::ObserverError;

/// A registry of observers keyed by identity, notified concurrently.
///
/// The observer map is the bus's only shared mutable state and is guarded by
/// a read/write lock: publishes snapshot it under the read lock, while
/// [`subscribe`](EventBus::subscribe) and
/// [`unsubscribe`](EventBus::unsubscribe) take the write lock. All three are
/// safe to call concurrently.
///
/// # Ordering
///
/// No ordering is guaranteed across observers, and two publishes racing into
/// the same observer are not guaranteed to arrive in publish order. Callers
/// needing FIFO must serialize their own publishes.
#[derive(Default)]
pub struct EventBus {
    observers: RwLock<HashMap<String, Arc<dyn Observer>>>,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer, replacing any existing one with the same
    /// identity (last-write-wins map semantics; a documented invariant, not
    /// a bug).
    pub async fn subscribe(&self, observer: Arc<dyn Observer>) {
        let id = observer.identity().to_string();
        self.observers.write().await.insert(id, observer);
    }

    /// Removes the observer with the given identity.
    ///
    /// Silent no-op when no such observer is subscribed.
    pub async fn unsubscribe(&self, id: &str) {
        self.observers.write().await.remove(id);
    }

    /// Number of currently subscribed observers.
    pub async fn len(&self) -> usize {
        self.observers.read().await.len()
    }

    /// Returns true when no observers are subscribed.
    pub async fn is_empty(&self) -> bool {
        self.observers.read().await.is_empty()
    }

    /// Delivers the event to every currently subscribed observer.
    ///
    /// Takes a point-in-time snapshot of the subscriber set, releases the
    /// lock, then notifies each observer on its own task so slow sinks block
    /// neither each other nor new subscriptions. Blocks until every task has
    /// finished; callers wanting fire-and-forget audit should spawn this
    /// call themselves.
    ///
    /// Cancellation is cooperative: once `cancel` fires, tasks that have not
    /// yet called the observer skip it, but in-flight deliveries are not
    /// preempted.
    ///
    /// # Errors
    ///
    /// Returns the first error any observer reported (order among
    /// concurrently failing observers is undefined), or `Ok(())` when all
    /// succeeded, were skipped, or no observer was subscribed.
    pub async fn notify_all(
        &self,
        cancel: &CancellationToken,
        event: &Event,
    ) -> Result<(), ObserverError> {
        let snapshot: Vec<Arc<dyn Observer>> = {
            let map = self.observers.read().await;
            map.values().cloned().collect()
        };

        if snapshot.is_empty() {
            return Ok(());
        }

        // Sized to the snapshot so no task can block reporting its error.
        let (err_tx, mut err_rx) = mpsc::channel::<ObserverError>(snapshot.len());
        let mut tasks = Vec::with_capacity(snapshot.len());

        for observer in snapshot {
            let event = event.clone();
            let cancel = cancel.clone();
            let err_tx = err_tx.clone();

            tasks.push(tokio::spawn(async move {
                if cancel.is_cancelled() {
                    tracing::debug!(observer = observer.identity(), "publish cancelled before dispatch");
                    return;
                }

                if let Err(e) = observer.notify(&event).await {
                    tracing::warn!(observer = observer.identity(), error = %e, "audit delivery failed");
                    let _ = err_tx.try_send(e);
                }
            }));
        }
        drop(err_tx);

        for task in tasks {
            // A panicking observer counts as failed but must not poison the
            // publisher; the panic is already logged by the runtime.
            let _ = task.await;
        }

        match err_rx.try_recv() {
            Ok(first) => Err(first),
            Err(_) => Ok(()),
        }
    }
}
