//! Application layer: the event bus and service orchestration.
//!
//! - [`bus`] - Concurrent fan-out of audit events to subscribed observers
//! - [`services`] - Link shortening and resolution built on the domain seams

pub mod bus;
pub mod services;
