// SPDX-License-Identifier: GPL-3.0-only

//! Preference persistence
//!
//! Key-value persistence for the session preferences, scoped to the device
//! installation. Reads happen once at session start; writes are
//! fire-and-forget from the controller's point of view but must be durable
//! before the next read in a later process lifetime, so the file-backed
//! store flushes on every write.

use crate::constants::{CONFIG_DIR_NAME, PREFERENCES_FILE};
use crate::errors::{StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Key-value persistence contract for user preferences.
///
/// Keys are the `PREF_*` constants; values are their string encodings
/// ("true"/"false", "portrait"/"landscape").
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// File-backed store: a JSON object of string pairs under the user config
/// directory. The whole file is rewritten and synced on each `set`.
pub struct JsonFileStore {
    path: PathBuf,
    cache: Mutex<Option<HashMap<String, String>>>,
}

impl JsonFileStore {
    /// Open the store at the default per-user location
    /// (`<config dir>/hardcopy/preferences.json`).
    pub fn open_default() -> StoreResult<Self> {
        let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::open(base.join(CONFIG_DIR_NAME).join(PREFERENCES_FILE)))
    }

    /// Open the store at an explicit path. The file is created lazily on
    /// the first write.
    pub fn open(path: PathBuf) -> Self {
        Self {
            path,
            cache: Mutex::new(None),
        }
    }

    async fn load(&self) -> HashMap<String, String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(?err, path = %self.path.display(), "Failed to parse preference file; starting empty");
                HashMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(?err, path = %self.path.display(), "Failed to read preference file; starting empty");
                HashMap::new()
            }
        }
    }

    async fn flush(&self, values: &HashMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(values)?;
        let mut file = tokio::fs::File::create(&self.path).await?;
        file.write_all(&payload).await?;
        // Durable before the next process-lifetime read.
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load().await);
        }
        Ok(cache.as_ref().and_then(|map| map.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load().await);
        }
        let map = cache.get_or_insert_with(HashMap::new);
        map.insert(key.to_string(), value.to_string());
        self.flush(map).await?;
        debug!(key, value, "Preference persisted");
        Ok(())
    }
}

/// In-memory store for tests and previews; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed stored values, as if written by an earlier session.
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let values = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");

        let store = JsonFileStore::open(path.clone());
        store.set("autoCapture", "true").await.expect("set");
        store.set("orientation", "landscape").await.expect("set");

        // A fresh instance must see the flushed values.
        let reopened = JsonFileStore::open(path);
        assert_eq!(
            reopened.get("autoCapture").await.expect("get"),
            Some("true".to_string())
        );
        assert_eq!(
            reopened.get("orientation").await.expect("get"),
            Some("landscape".to_string())
        );
        assert_eq!(reopened.get("soundEnabled").await.expect("get"), None);
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").expect("write");

        let store = JsonFileStore::open(path);
        assert_eq!(store.get("autoCapture").await.expect("get"), None);
    }
}
