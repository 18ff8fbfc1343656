pub mod memory;
pub mod local_storage;
pub mod auto;

pub use memory::MemoryStore;
pub use local_storage::LocalStorageStore;
pub use auto::{auto_detect_store, open_store};
