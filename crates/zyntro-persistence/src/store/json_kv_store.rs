use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use zyntro_core::{KeyValueStore, ZyntroError, ZyntroResult};

use crate::store::atomic_writer::AtomicWriter;

const FORMAT_VERSION: u32 = 1;

/// Key-value store persisted as a single JSON file.
/// Every `set` rewrites the file atomically.
#[derive(Debug)]
pub struct JsonKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// On-disk layout of the store file
#[derive(Debug, Serialize, Deserialize)]
struct KvEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl JsonKeyValueStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> ZyntroResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = AtomicWriter::read_all(&self.path).await?;
        let envelope: KvEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| ZyntroError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(ZyntroError::Serialization(format!(
                "Unsupported store format version: {}",
                envelope.version
            )));
        }
        Ok(envelope.entries)
    }
}

#[async_trait]
impl KeyValueStore for JsonKeyValueStore {
    async fn get(&self, key: &str) -> ZyntroResult<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> ZyntroResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        let envelope = KvEnvelope {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            entries,
        };
        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| ZyntroError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await?;

        tracing::info!("Stored {} in {}", key, self.path.display());
        Ok(())
    }
}
