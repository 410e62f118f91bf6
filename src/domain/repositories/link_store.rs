//! Storage seam for short link mappings.

use async_trait::async_trait;

use crate::error::StoreError;

/// Storage interface for code-to-URL mappings.
///
/// [`code_exists`](LinkStore::code_exists) doubles as the existence oracle
/// consumed by [`crate::utils::collision::resolve`]. True uniqueness is
/// enforced by the backend (a unique constraint on the code column); the
/// core only uses this seam to keep the common case collision-free and to
/// make re-shortening idempotent.
///
/// # Implementations
///
/// Provided by the embedding application. Test mocks available with
/// `cfg(test)`; the integration suite ships an in-memory implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Reports whether a short code is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failures.
    async fn code_exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Looks up the code previously assigned to a long URL, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failures.
    async fn find_code_by_url(&self, long_url: &str) -> Result<Option<String>, StoreError>;

    /// Looks up the long URL behind a short code, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failures.
    async fn find_url_by_code(&self, code: &str) -> Result<Option<String>, StoreError>;

    /// Persists a code-to-URL mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failures, including unique
    /// constraint violations.
    async fn save(&self, code: &str, long_url: &str) -> Result<(), StoreError>;
}
