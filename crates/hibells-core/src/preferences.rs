//! Fire-and-forget facade over a [`KeyValuePort`].
//!
//! Callers never see storage errors: failures are logged and the operation
//! becomes a no-op. Collections are stored as whole JSON values, and
//! [`Preferences::update`] holds a per-key async mutex across the
//! read-modify-write so overlapping mutations of one key cannot lose updates.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::lock::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::KeyValuePort;

pub struct Preferences {
    store: Rc<dyn KeyValuePort>,
    locks: RefCell<HashMap<String, Rc<Mutex<()>>>>,
}

impl Preferences {
    pub fn new(store: Rc<dyn KeyValuePort>) -> Self {
        Self {
            store,
            locks: RefCell::new(HashMap::new()),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.store.backend_name()
    }

    /// `None` when the key is absent or the read failed
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                log::error!("Error retrieving {}: {}", key, e);
                None
            }
        }
    }

    /// Returns whether the write landed
    pub async fn set(&self, key: &str, value: &str) -> bool {
        match self.store.set(key, value).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error storing {}: {}", key, e);
                false
            }
        }
    }

    pub async fn remove(&self, key: &str) -> bool {
        match self.store.remove(key).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error removing {}: {}", key, e);
                false
            }
        }
    }

    pub async fn clear(&self) -> bool {
        match self.store.clear().await {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error clearing storage: {}", e);
                false
            }
        }
    }

    /// Read a JSON value. Absent, unreadable, or corrupt data reads as `T::default()`.
    pub async fn read_json<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.get(key).await {
            Some(raw) => decode_or_default(key, &raw),
            None => T::default(),
        }
    }

    pub async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(json) => self.set(key, &json).await,
            Err(e) => {
                log::error!("Error encoding {}: {}", key, e);
                false
            }
        }
    }

    /// Serialized read-modify-write of the JSON value under `key`.
    ///
    /// Returns the value that was written, or `None` if the read or the
    /// write failed (in which case nothing changed).
    pub async fn update<T, F>(&self, key: &str, mutate: F) -> Option<T>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T),
    {
        let lock = self.lock_for(key);
        let _guard = lock.lock().await;

        let mut value: T = match self.store.get(key).await {
            Ok(Some(raw)) => decode_or_default(key, &raw),
            Ok(None) => T::default(),
            Err(e) => {
                log::error!("Error retrieving {}: {}", key, e);
                return None;
            }
        };

        mutate(&mut value);

        if self.write_json(key, &value).await {
            Some(value)
        } else {
            None
        }
    }

    fn lock_for(&self, key: &str) -> Rc<Mutex<()>> {
        self.locks
            .borrow_mut()
            .entry(key.to_string())
            .or_insert_with(|| Rc::new(Mutex::new(())))
            .clone()
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(key: &str, raw: &str) -> T {
    match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Corrupt data under {} ({}), treating as empty", key, e);
            T::default()
        }
    }
}
