//! Audit event model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The domain action an audit event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// A long URL was shortened.
    Shortened,
    /// A short code was resolved and followed.
    Followed,
}

/// An immutable record of one audited domain action.
///
/// Events are created at the moment an action completes, published to the
/// [`crate::application::bus::EventBus`], and discarded once every observer
/// has been notified. They are never mutated and never stored by this crate.
///
/// # Wire format
///
/// Serialized as `{"ts": <epoch seconds>, "action": "<snake_case>",
/// "user_id": "<string>", "url": "<string>"}`. The file sink writes exactly
/// one such object per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Creation time, seconds since the Unix epoch.
    pub ts: i64,
    /// What happened.
    pub action: Action,
    /// Acting user; empty string means anonymous.
    pub user_id: String,
    /// The subject URL (the long URL for both actions).
    pub url: String,
}

impl Event {
    /// Creates an event stamped with the current time.
    pub fn new(action: Action, user_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_timestamp(Utc::now().timestamp(), action, user_id, url)
    }

    /// Creates an event with an explicit timestamp.
    ///
    /// Intended for tests and for replaying externally sourced records.
    pub fn with_timestamp(
        ts: i64,
        action: Action,
        user_id: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            ts,
            action,
            user_id: user_id.into(),
            url: url.into(),
        }
    }
}
