//! Pick a key-value backend.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use hibells_core::ports::KeyValuePort;
use hibells_types::config::StorageBackendType;
use super::{LocalStorageStore, MemoryStore};

/// Open the best available backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_store() -> Rc<dyn KeyValuePort> {
    match LocalStorageStore::open() {
        Ok(store) => {
            log::info!("Storage backend: localStorage");
            Rc::new(store)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}

/// Open the backend the config asks for. A forced localStorage that fails
/// to open still degrades to memory rather than leaving the app without storage.
pub fn open_store(backend: &StorageBackendType) -> Rc<dyn KeyValuePort> {
    match backend {
        StorageBackendType::Auto | StorageBackendType::LocalStorage => auto_detect_store(),
        StorageBackendType::Memory => {
            log::info!("Storage backend: memory");
            Rc::new(MemoryStore::new())
        }
    }
}
