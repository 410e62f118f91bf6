//! Domain layer containing core entities and trait contracts.
//!
//! This module defines the audit event model and the seams the rest of the
//! system plugs into, independent of any infrastructure concern.
//!
//! # Architecture
//!
//! - [`event`] - Immutable audit event records
//! - [`observer`] - The audit sink capability trait
//! - [`repositories`] - Storage trait definitions (the existence oracle lives here)
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits defined here are implemented by the infrastructure layer (concrete
//!   observers) or by the embedding application (storage)
//! - Events are transient values: created, fanned out, forgotten

pub mod event;
pub mod observer;
pub mod repositories;
