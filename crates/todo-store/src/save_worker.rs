use std::sync::Arc;
use todo_persistence::KeyValueStore;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Counts of writes the worker attempted before its channel closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveStats {
    pub written: usize,
    pub failed: usize,
}

/// Background writer that drains queued snapshot payloads and applies
/// them to the store one at a time, in the order they were queued.
pub struct SaveWorker {
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
    rx: mpsc::UnboundedReceiver<String>,
}

impl SaveWorker {
    pub(crate) fn new(
        store: Arc<dyn KeyValueStore>,
        storage_key: String,
        rx: mpsc::UnboundedReceiver<String>,
    ) -> Self {
        Self {
            store,
            storage_key,
            rx,
        }
    }

    /// Run until every sender is dropped and the queue is empty.
    /// Write failures are logged and skipped; the next payload still goes out.
    pub async fn run(mut self) -> SaveStats {
        let mut stats = SaveStats::default();

        while let Some(payload) = self.rx.recv().await {
            match self.store.set(&self.storage_key, payload).await {
                Ok(()) => {
                    stats.written += 1;
                    tracing::debug!("Persisted snapshot under '{}'", self.storage_key);
                }
                Err(e) => {
                    stats.failed += 1;
                    tracing::error!("Failed to save todos: {}", e);
                }
            }
        }

        tracing::debug!(
            "Save worker finished: {} written, {} failed",
            stats.written,
            stats.failed
        );
        stats
    }

    pub fn spawn(self) -> JoinHandle<SaveStats> {
        tokio::spawn(self.run())
    }
}
