//! Append-only file audit sink.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;

use crate::domain::event::Event;
use crate::domain::observer::Observer;
use crate::error::ObserverError;

/// An observer that appends each event as one JSON line to a file.
///
/// Every delivery flushes immediately: this is an audit trail, not a
/// high-throughput log, so durability wins over batching. The writer sits
/// behind a mutex because overlapping publishes can reach the same observer
/// concurrently (within a single publish the bus calls `notify` at most
/// once per observer).
pub struct FileObserver {
    id: String,
    writer: Mutex<BufWriter<tokio::fs::File>>,
}

impl FileObserver {
    /// Opens (or creates) the file at `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Io`] when the file cannot be opened; the
    /// observer is never constructed, so a bad audit path fails fast at
    /// startup instead of silently dropping events later.
    pub async fn open(id: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, ObserverError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .await?;

        Ok(Self {
            id: id.into(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

#[async_trait]
impl Observer for FileObserver {
    async fn notify(&self, event: &Event) -> Result<(), ObserverError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(&line).await?;
        writer.flush().await?;

        Ok(())
    }

    fn identity(&self) -> &str {
        &self.id
    }

    async fn stop(&self) -> Result<(), ObserverError> {
        self.writer.lock().await.flush().await?;
        Ok(())
    }
}
