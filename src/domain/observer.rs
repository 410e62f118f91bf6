//! The audit sink capability trait.

use async_trait::async_trait;

use crate::domain::event::Event;
use crate::error::ObserverError;

/// A sink that receives a copy of every published audit event.
///
/// Observers fail independently: the bus never lets one observer's error or
/// slowness affect delivery to the others. Each observer owns its resources
/// (file handle, HTTP client) exclusively and guards its own mutable state,
/// because two overlapping publishes may reach the same observer
/// concurrently. Within a single publish the bus issues at most one
/// [`notify`](Observer::notify) call per observer.
///
/// # Implementations
///
/// - [`crate::infrastructure::observers::FileObserver`] - append-only JSON-lines file
/// - [`crate::infrastructure::observers::RemoteObserver`] - HTTP POST endpoint
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Observer: Send + Sync {
    /// Delivers one event to the sink. May perform I/O.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError`] only for conditions the implementation
    /// defines as "delivery failed" (typically transport-level failures).
    /// Application-level rejections by the sink are logged, not raised.
    async fn notify(&self, event: &Event) -> Result<(), ObserverError>;

    /// Stable identity used as the subscription key.
    ///
    /// Must be unique within one bus; subscribing a second observer with the
    /// same identity replaces the first.
    fn identity(&self) -> &str;

    /// Flushes buffers and releases owned resources.
    ///
    /// The bus never calls this. The owning application calls it on every
    /// subscribed observer at shutdown, after publishing has stopped.
    async fn stop(&self) -> Result<(), ObserverError> {
        Ok(())
    }
}
