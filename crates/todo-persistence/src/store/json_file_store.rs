use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use todo_core::{TodoError, TodoResult};
use tokio::sync::Mutex;

const FORMAT_VERSION: u32 = 1;

/// JSON file-backed key-value store.
/// Every key lives in one document; each `set` rewrites the file atomically.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// On-disk layout of the store file
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl JsonEnvelope {
    fn parse(bytes: &[u8]) -> TodoResult<Self> {
        let envelope: Self = serde_json::from_slice(bytes)
            .map_err(|e| TodoError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(TodoError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_entries(&self) -> TodoResult<Option<BTreeMap<String, String>>> {
        match AtomicWriter::read_optional(&self.path).await? {
            Some(bytes) => Ok(Some(JsonEnvelope::parse(&bytes)?.entries)),
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> TodoResult<Option<String>> {
        let entries = self
            .load_entries()
            .await
            .map_err(|e| TodoError::store_read(key, e))?;
        Ok(entries.and_then(|mut entries| entries.remove(key)))
    }

    async fn set(&self, key: &str, value: String) -> TodoResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = match self.load_entries().await {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    "Replacing unreadable store file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value);

        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            entries,
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| TodoError::store_write(key, e))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes)
            .await
            .map_err(|e| TodoError::store_write(key, e))?;

        tracing::info!(
            "Saved {} bytes under '{}' to {}",
            json_bytes.len(),
            key,
            self.path.display()
        );
        Ok(())
    }
}
