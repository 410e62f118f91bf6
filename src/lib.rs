//! # Shortener Core
//!
//! The core library of a URL shortening service: deterministic short code
//! generation with collision resolution, and a concurrent audit event bus
//! with independently-failing observers.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Audit events, the observer capability, storage traits
//! - **Application Layer** ([`application`]) - The event bus and link service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concrete file and HTTP audit sinks
//! - **Utilities** ([`utils`]) - Base-62 encoding, code generation, collision resolution
//!
//! Transport, persistence backends, and authentication live in the embedding
//! application; this crate consumes persistence only through the
//! [`domain::repositories::LinkStore`] seam.
//!
//! ## Short codes
//!
//! A code is derived from the URL itself: MD5 digest, first 8 bytes as a
//! big-endian integer, base-62 encoded, truncated to 8 characters. The same
//! URL always produces the same code, on any node, with no sequence
//! allocation. Collisions are resolved against the store's existence oracle
//! with a bounded deterministic retry; true uniqueness stays with the
//! storage layer's constraint.
//!
//! ```
//! use shortener_core::utils::code_generator::generate_code;
//!
//! assert_eq!(generate_code("https://example.com/some/long/url"), "4ZyG5E7z");
//! ```
//!
//! ## Audit
//!
//! Domain actions publish immutable [`domain::event::Event`]s to an
//! [`application::bus::EventBus`], which fans each event out concurrently to
//! every subscribed [`domain::observer::Observer`]. One slow or broken sink
//! never blocks the others, and the audit trail is a best-effort side
//! channel: its failures must never fail the primary shorten/redirect path.
//!
//! ## Configuration
//!
//! Observer wiring is loaded from environment variables via
//! [`config::Config`]; see the [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use error::{AppError, ObserverError, StoreError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::bus::EventBus;
    pub use crate::application::services::LinkService;
    pub use crate::domain::event::{Action, Event};
    pub use crate::domain::observer::Observer;
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::{AppError, ObserverError, StoreError};
    pub use crate::infrastructure::observers::{FileObserver, RemoteObserver};
    pub use crate::utils::code_generator::{CODE_LENGTH, generate_code};
    pub use crate::utils::collision::resolve;
}
