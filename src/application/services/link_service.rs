//! Link shortening and resolution service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::bus::EventBus;
use crate::domain::event::{Action, Event};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::collision::resolve;
use crate::utils::url_normalizer::normalize_url;

/// Service for creating and resolving short links.
///
/// Orchestrates the deterministic code generator, collision resolution
/// against the store's existence oracle, and audit publication. Audit is a
/// best-effort side channel: a failed publish is logged and never fails the
/// primary shorten/follow operation.
pub struct LinkService<S: LinkStore> {
    store: Arc<S>,
    bus: Arc<EventBus>,
    cancel: CancellationToken,
}

impl<S: LinkStore> LinkService<S> {
    /// Creates a new link service.
    ///
    /// `cancel` bounds audit dispatch during shutdown: once it fires,
    /// pending deliveries are skipped (in-flight ones still complete).
    pub fn new(store: Arc<S>, bus: Arc<EventBus>, cancel: CancellationToken) -> Self {
        Self { store, bus, cancel }
    }

    /// Shortens a URL, returning its code.
    ///
    /// # Idempotency
    ///
    /// The URL is normalized first, and a URL that was already shortened
    /// returns its existing code. Otherwise the code is derived from the
    /// normalized URL itself, checked against the store for collisions, and
    /// persisted; a `shortened` audit event is then published.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or non-HTTP(S) URLs
    /// and [`AppError::Store`] when the backend fails. Audit failures are
    /// not errors.
    pub async fn shorten(&self, long_url: &str, user_id: &str) -> Result<String, AppError> {
        let normalized = normalize_url(long_url)?;

        if let Some(existing) = self.store.find_code_by_url(&normalized).await? {
            return Ok(existing);
        }

        let candidate = generate_code(&normalized);
        let store = self.store.clone();
        let code = resolve(candidate, move |code| {
            let store = store.clone();
            async move {
                match store.code_exists(&code).await {
                    Ok(taken) => taken,
                    Err(e) => {
                        // Treat an unavailable oracle as "free" and let the
                        // storage constraint reject a real duplicate.
                        tracing::warn!(error = %e, "existence check failed during collision resolution");
                        false
                    }
                }
            }
        })
        .await;

        self.store.save(&code, &normalized).await?;
        self.publish(Action::Shortened, user_id, &normalized).await;

        Ok(code)
    }

    /// Resolves a short code to its long URL.
    ///
    /// Publishes a `followed` audit event on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Store`] when the backend fails.
    pub async fn follow(&self, code: &str, user_id: &str) -> Result<String, AppError> {
        let long_url = self
            .store
            .find_url_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("short code {code:?} is not known")))?;

        self.publish(Action::Followed, user_id, &long_url).await;

        Ok(long_url)
    }

    async fn publish(&self, action: Action, user_id: &str, url: &str) {
        let event = Event::new(action, user_id, url);

        if let Err(e) = self.bus.notify_all(&self.cancel, &event).await {
            tracing::warn!(error = %e, ?action, "audit publish incomplete");
        }
    }
}
