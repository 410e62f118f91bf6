//! Audit configuration loaded from environment variables.
//!
//! Both sinks are optional; an unset variable simply leaves that observer
//! out of the bus. A *set but unusable* value (unparseable URL, unwritable
//! file path) fails fast at startup - a misconfigured audit sink should
//! surface immediately, not silently vanish.
//!
//! ## Variables
//!
//! - `AUDIT_LOG_PATH` - file sink path (optional)
//! - `AUDIT_REMOTE_URL` - remote sink endpoint, must be a valid URL (optional)
//! - `AUDIT_REMOTE_TIMEOUT_SECS` - remote request timeout (default: 10)

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::bus::EventBus;
use crate::error::ObserverError;
use crate::infrastructure::observers::{FileObserver, RemoteObserver};

/// Identity under which the file sink subscribes.
pub const FILE_OBSERVER_ID: &str = "audit-file";
/// Identity under which the remote sink subscribes.
pub const REMOTE_OBSERVER_ID: &str = "audit-remote";

/// Audit wiring configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the append-only audit log, if file auditing is enabled.
    pub audit_log_path: Option<PathBuf>,
    /// Endpoint of the remote audit sink, if remote auditing is enabled.
    pub audit_remote_url: Option<String>,
    /// Request timeout for the remote sink.
    pub audit_remote_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `AUDIT_REMOTE_URL` is set but not a valid URL,
    /// or when `AUDIT_REMOTE_TIMEOUT_SECS` is set but not a positive integer.
    pub fn from_env() -> Result<Self> {
        let audit_log_path = env::var("AUDIT_LOG_PATH").ok().map(PathBuf::from);

        let audit_remote_url = match env::var("AUDIT_REMOTE_URL") {
            Ok(raw) => {
                url::Url::parse(&raw).context("AUDIT_REMOTE_URL is not a valid URL")?;
                Some(raw)
            }
            Err(_) => None,
        };

        let timeout_secs = match env::var("AUDIT_REMOTE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("AUDIT_REMOTE_TIMEOUT_SECS must be a positive integer")?,
            Err(_) => 10,
        };

        Ok(Self {
            audit_log_path,
            audit_remote_url,
            audit_remote_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Builds an [`EventBus`] with the observers the configuration enables.
///
/// # Errors
///
/// Returns [`ObserverError`] when a configured sink cannot be constructed
/// (unwritable file path, bad client setup). Nothing is subscribed in that
/// case.
pub async fn build_event_bus(config: &Config) -> Result<EventBus, ObserverError> {
    let bus = EventBus::new();

    if let Some(path) = &config.audit_log_path {
        let observer = FileObserver::open(FILE_OBSERVER_ID, path).await?;
        bus.subscribe(Arc::new(observer)).await;
    }

    if let Some(endpoint) = &config.audit_remote_url {
        let observer =
            RemoteObserver::with_timeout(REMOTE_OBSERVER_ID, endpoint, config.audit_remote_timeout)?;
        bus.subscribe(Arc::new(observer)).await;
    }

    Ok(bus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_config_builds_empty_bus() {
        let config = Config {
            audit_log_path: None,
            audit_remote_url: None,
            audit_remote_timeout: Duration::from_secs(10),
        };

        let bus = build_event_bus(&config).await.unwrap();
        assert!(bus.is_empty().await);
    }

    #[tokio::test]
    async fn test_bad_file_path_fails_fast() {
        let config = Config {
            audit_log_path: Some(PathBuf::from("/nonexistent-dir/audit.log")),
            audit_remote_url: None,
            audit_remote_timeout: Duration::from_secs(10),
        };

        assert!(build_event_bus(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_both_sinks_subscribed() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            audit_log_path: Some(dir.path().join("audit.log")),
            audit_remote_url: Some("http://127.0.0.1:9/audit".to_string()),
            audit_remote_timeout: Duration::from_secs(1),
        };

        let bus = build_event_bus(&config).await.unwrap();
        assert_eq!(bus.len().await, 2);
    }
}
