//! Remote HTTP audit sink.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::event::Event;
use crate::domain::observer::Observer;
use crate::error::ObserverError;

/// Default request timeout for the remote sink.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An observer that POSTs each event as JSON to a remote endpoint.
///
/// Delivery is best effort with no retries; the bus-level timeout is the
/// client's own request timeout. A non-2xx response counts as *delivered* -
/// the sink received the event and chose to reject it - and is logged as a
/// warning rather than returned as an error. Only transport-level failures
/// (connection refused, timeout) surface from [`notify`](Observer::notify).
/// Collapsing those two cases would change what the bus's aggregate error
/// means, so the distinction is kept deliberately.
pub struct RemoteObserver {
    id: String,
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteObserver {
    /// Creates a remote sink with the default 10s timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Client`] when the HTTP client cannot be
    /// built.
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>) -> Result<Self, ObserverError> {
        Self::with_timeout(id, endpoint, DEFAULT_TIMEOUT)
    }

    /// Creates a remote sink with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Client`] when the HTTP client cannot be
    /// built.
    pub fn with_timeout(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ObserverError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ObserverError::Client(e.to_string()))?;

        Ok(Self {
            id: id.into(),
            endpoint: endpoint.into(),
            client,
        })
    }

    /// The endpoint events are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Observer for RemoteObserver {
    async fn notify(&self, event: &Event) -> Result<(), ObserverError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(event)
            .send()
            .await
            .map_err(|e| ObserverError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Delivered, sink rejected it. Not a delivery failure.
            tracing::warn!(
                observer = %self.id,
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "audit sink rejected event"
            );
        }

        Ok(())
    }

    fn identity(&self) -> &str {
        &self.id
    }
}
