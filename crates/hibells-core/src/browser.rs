//! Portal view state: loading flags, advisory network status, offline save.
//!
//! The frame itself is a [`FramePort`]; its load/error signals come back
//! through [`BrowserView::on_frame_event`]. Nothing here retries or caches:
//! "offline" only changes the messaging.

use std::future::Future;

use chrono::{DateTime, Utc};
use hibells_types::{
    event::{FrameEvent, Notice},
    resource::SavedResource,
};

use crate::collections::SavedPages;
use crate::ports::{FramePort, SandboxPolicy};

#[derive(Debug)]
pub struct BrowserView {
    url: String,
    sandbox: SandboxPolicy,
    loading: bool,
    refreshing: bool,
    online: bool,
    /// Set by the first `load`; frame signals before that are the blank
    /// placeholder document, not the portal.
    requested: bool,
}

impl BrowserView {
    pub fn new(url: impl Into<String>, online: bool) -> Self {
        Self {
            url: url.into(),
            sandbox: SandboxPolicy::portal(),
            loading: false,
            refreshing: false,
            online,
            requested: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn sandbox(&self) -> &SandboxPolicy {
        &self.sandbox
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Point the frame at `url`. A frame that refuses the URL ends the load
    /// immediately with an advisory.
    pub fn load(&mut self, url: &str, frame: &dyn FramePort) -> Option<Notice> {
        self.url = url.to_string();
        self.loading = true;
        self.requested = true;
        match frame.load(&self.url, &self.sandbox) {
            Ok(()) => None,
            Err(e) => {
                log::error!("Portal load failed: {}", e);
                self.on_frame_event(FrameEvent::Error { message: e.to_string() })
            }
        }
    }

    /// Reload the current URL. Ignored while a refresh is still in flight.
    pub fn refresh(&mut self, frame: &dyn FramePort) -> (bool, Option<Notice>) {
        if self.refreshing {
            return (false, None);
        }
        self.refreshing = true;
        let url = self.url.clone();
        let notice = self.load(&url, frame);
        (true, notice)
    }

    pub fn on_frame_event(&mut self, event: FrameEvent) -> Option<Notice> {
        if !self.requested {
            log::debug!("Ignoring frame event before first load: {:?}", event);
            return None;
        }
        self.loading = false;
        self.refreshing = false;
        match event {
            FrameEvent::Loaded if !self.online => Some(Notice::info(
                "Offline Mode",
                "You appear to be offline. Some portal features may be limited.",
            )),
            FrameEvent::Loaded => None,
            FrameEvent::Error { message } => {
                log::warn!("Portal frame error: {}", message);
                Some(Notice::error(
                    "Connection Error",
                    "Failed to load portal. Please check your connection.",
                ))
            }
        }
    }

    /// Advisory only; loading is never blocked on it
    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            log::info!("Network {}", if online { "online" } else { "offline" });
        }
        self.online = online;
    }

    /// Append the current page to the saved resources. The returned future
    /// owns everything it needs, so it can be spawned after `self` moves on.
    pub fn save_current_page_offline(
        &self,
        pages: SavedPages,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Option<SavedResource>> + 'static {
        let url = self.url.clone();
        async move { pages.save_page(&url, now).await }
    }
}
