//! Error types shared across the crate.
//!
//! Three layers of failure are distinguished:
//!
//! - [`ObserverError`] - constructing an audit sink or delivering one event to it
//! - [`StoreError`] - opaque failures reported by the storage seam
//! - [`AppError`] - service-level taxonomy surfaced to callers of
//!   [`crate::application::services::LinkService`]
//!
//! Collision exhaustion in the code generator is deliberately *not* part of
//! this taxonomy: the resolver degrades best-effort and leaves uniqueness
//! enforcement to the storage layer (see [`crate::utils::collision`]).

use thiserror::Error;

/// Errors raised while constructing an observer or delivering an event to it.
#[derive(Debug, Error)]
pub enum ObserverError {
    /// File sink I/O failure (open, append, or flush).
    #[error("observer I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The event could not be serialized for the sink.
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Transport-level delivery failure (connection error, timeout).
    ///
    /// An HTTP-level rejection (non-2xx) is *not* a delivery failure; the
    /// remote sink logs it and reports success. See
    /// [`crate::infrastructure::observers::RemoteObserver`].
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// The sink's client could not be built (e.g. invalid TLS setup).
    #[error("observer client error: {0}")]
    Client(String),
}

/// Opaque failure reported by a [`crate::domain::repositories::LinkStore`]
/// implementation.
///
/// The core never inspects the backend; implementations put whatever detail
/// they have into the message.
#[derive(Debug, Error)]
#[error("storage error: {0}")]
pub struct StoreError(pub String);

/// Service-level errors returned by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// The input failed validation (e.g. a malformed or non-HTTP URL).
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested short code is not known to the store.
    #[error("not found: {0}")]
    NotFound(String),

    /// The storage seam failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(String),
}
