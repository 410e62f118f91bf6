//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete audit sinks behind the [`crate::domain::observer::Observer`]
//! trait.
//!
//! # Modules
//!
//! - [`observers`] - File and remote HTTP audit sinks

pub mod observers;
