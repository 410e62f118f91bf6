//! Storage trait definitions.
//!
//! Persistence is an external collaborator: this crate consumes it only
//! through the narrow [`LinkStore`] seam, so backends can be swapped without
//! touching collision or audit logic.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
