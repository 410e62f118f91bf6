//! Concrete audit sinks.
//!
//! - [`FileObserver`] - append-only, line-delimited JSON file
//! - [`RemoteObserver`] - best-effort HTTP POST endpoint

pub mod file;
pub mod remote;

pub use file::FileObserver;
pub use remote::RemoteObserver;
