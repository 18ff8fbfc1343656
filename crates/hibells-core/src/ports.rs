//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `hibells-core` (pure Rust).
//! Implementations live in `hibells-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hibells_types::Result;

// ─── Key-Value Port ──────────────────────────────────────────

/// A string-valued preference store. Values are opaque to the store;
/// callers JSON-encode collections themselves.
#[async_trait(?Send)]
pub trait KeyValuePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every value this store owns
    async fn clear(&self) -> Result<()>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Notification Port ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// Not asked yet
    Prompt,
}

/// A platform alert that fires once at an absolute time
#[derive(Debug, Clone, PartialEq)]
pub struct OneShotNotification {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub at: DateTime<Utc>,
    pub sound: Option<String>,
}

#[async_trait(?Send)]
pub trait NotificationPort {
    /// Ask the user for permission to display notifications
    async fn request_permission(&self) -> Result<Permission>;

    /// Current permission without prompting
    fn permission(&self) -> Permission;

    /// Hand a one-shot alert to the platform. There is no cancellation.
    async fn schedule(&self, notification: OneShotNotification) -> Result<()>;
}

// ─── Frame Port ──────────────────────────────────────────────

/// Capabilities the portal frame may be granted. Anything not listed here
/// cannot be expressed, so the frame can never be elevated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandboxCapability {
    Scripts,
    Forms,
    SameOrigin,
    Popups,
    TopNavigation,
    Downloads,
}

impl SandboxCapability {
    pub fn token(&self) -> &'static str {
        match self {
            SandboxCapability::Scripts => "allow-scripts",
            SandboxCapability::Forms => "allow-forms",
            SandboxCapability::SameOrigin => "allow-same-origin",
            SandboxCapability::Popups => "allow-popups",
            SandboxCapability::TopNavigation => "allow-top-navigation",
            SandboxCapability::Downloads => "allow-downloads",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxPolicy {
    capabilities: Vec<SandboxCapability>,
}

impl SandboxPolicy {
    /// The fixed allow-list the university portal runs under
    pub fn portal() -> Self {
        Self {
            capabilities: vec![
                SandboxCapability::Scripts,
                SandboxCapability::Forms,
                SandboxCapability::SameOrigin,
                SandboxCapability::Popups,
                SandboxCapability::TopNavigation,
                SandboxCapability::Downloads,
            ],
        }
    }

    pub fn allows(&self, capability: SandboxCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Value for the `sandbox` attribute
    pub fn attribute_value(&self) -> String {
        self.capabilities
            .iter()
            .map(|c| c.token())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Screen rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An embedded rendering surface for external content.
/// Load completion and errors arrive later as `FrameEvent`s on the event bus.
pub trait FramePort {
    /// Point the frame at `url` under `sandbox`
    fn load(&self, url: &str, sandbox: &SandboxPolicy) -> Result<()>;

    fn set_visible(&self, visible: bool);

    fn set_bounds(&self, bounds: FrameBounds);
}
