use serde::{Deserialize, Serialize};

/// Top-level app configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The externally owned portal shown in the Portal tab
    pub portal_url: String,
    /// Simulated "typing" time before the assistant answers
    pub reply_delay_ms: u32,
    /// Cosmetic delay before a tab switch lands; 0 switches immediately
    pub tab_switch_delay_ms: u32,
    /// How far in the future a reminder notification fires
    pub reminder_delay_secs: u32,
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            portal_url: DEFAULT_PORTAL_URL.to_string(),
            reply_delay_ms: 1500,
            tab_switch_delay_ms: 0,
            reminder_delay_secs: 3600,
            storage: StorageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    LocalStorage,
    Memory,
}

impl StorageBackendType {
    pub fn all() -> &'static [StorageBackendType] {
        &[
            StorageBackendType::Auto,
            StorageBackendType::LocalStorage,
            StorageBackendType::Memory,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            StorageBackendType::Auto => "Auto-detect",
            StorageBackendType::LocalStorage => "Local storage",
            StorageBackendType::Memory => "Memory",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            StorageBackendType::Auto => "Uses local storage when the browser allows it, memory otherwise.",
            StorageBackendType::LocalStorage => "Persistent. Saved pages and favorites survive restarts.",
            StorageBackendType::Memory => "Volatile. Everything is forgotten when the app closes.",
        }
    }
}

pub const DEFAULT_PORTAL_URL: &str = "https://www.bellsuniversity.edu.ng";
