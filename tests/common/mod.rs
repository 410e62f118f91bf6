#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shortener_core::domain::repositories::LinkStore;
use shortener_core::error::StoreError;

/// In-memory [`LinkStore`] used by the integration suite.
///
/// Keeps both directions of the mapping so idempotent re-shortening and
/// redirects can be exercised without a database.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Maps>,
}

#[derive(Default)]
struct Maps {
    url_by_code: HashMap<String, String>,
    code_by_url: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pre-seeds a mapping, e.g. to force a collision.
    pub async fn seed(&self, code: &str, long_url: &str) {
        let mut maps = self.inner.write().await;
        maps.url_by_code.insert(code.to_string(), long_url.to_string());
        maps.code_by_url.insert(long_url.to_string(), code.to_string());
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.url_by_code.len()
    }
}

#[async_trait]
impl LinkStore for InMemoryStore {
    async fn code_exists(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.url_by_code.contains_key(code))
    }

    async fn find_code_by_url(&self, long_url: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().await.code_by_url.get(long_url).cloned())
    }

    async fn find_url_by_code(&self, code: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().await.url_by_code.get(code).cloned())
    }

    async fn save(&self, code: &str, long_url: &str) -> Result<(), StoreError> {
        let mut maps = self.inner.write().await;

        if maps.url_by_code.contains_key(code) {
            return Err(StoreError(format!("unique violation on code {code:?}")));
        }

        maps.url_by_code.insert(code.to_string(), long_url.to_string());
        maps.code_by_url.insert(long_url.to_string(), code.to_string());
        Ok(())
    }
}
