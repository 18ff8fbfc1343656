use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::resource::SavedResource;

/// Events published by async tasks and platform callbacks.
/// The app drains these once per frame.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The embedded frame finished loading or failed
    Frame(FrameEvent),

    /// Host connectivity changed
    NetworkChanged { online: bool },

    /// The simulated typing delay for the head of the reply queue elapsed
    ReplyDue,

    /// A deferred tab switch's cosmetic delay elapsed
    TabSwitchDue { seq: u64 },

    /// Startup read of the onboarding flag completed
    OnboardingChecked { seen: bool },

    /// Config restored from storage
    ConfigRestored(AppConfig),

    /// Saved pages list (re)loaded
    SavedPagesLoaded(Vec<SavedResource>),

    /// A favorite set (re)loaded; `key` is the storage key it lives under
    FavoritesLoaded { key: String, ids: Vec<String> },

    /// Notification permission resolved
    PermissionResolved { granted: bool },

    /// Settings save finished
    ConfigSaved { ok: bool },

    /// Transient advisory message for the user
    Notice(Notice),
}

/// Signals from the sandboxed frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    Loaded,
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A non-blocking toast shown over the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Error,
        }
    }
}
