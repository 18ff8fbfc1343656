//! `window.localStorage` key-value store.
//! Persistent across reloads; keys are stored unprefixed so data written by
//! earlier builds (`savedPages`, `savedArticles`, ...) is picked up as-is.

use async_trait::async_trait;
use web_sys::Storage;

use hibells_core::ports::KeyValuePort;
use hibells_types::{AppError, Result};

const PROBE_KEY: &str = "__hibells_probe__";

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open localStorage and make sure it accepts writes
    /// (private browsing modes can expose it read-only).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage not available".to_string()))?;

        storage
            .set_item(PROBE_KEY, "1")
            .map_err(|e| AppError::Storage(format!("localStorage is read-only: {:?}", e)))?;
        let _ = storage.remove_item(PROBE_KEY);

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl KeyValuePort for LocalStorageStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    async fn clear(&self) -> Result<()> {
        self.storage
            .clear()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
