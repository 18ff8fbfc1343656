//! Typed collections persisted through [`Preferences`].

use std::rc::Rc;

use chrono::{DateTime, Utc};
use hibells_types::{
    config::AppConfig,
    keys,
    resource::SavedResource,
};

use crate::preferences::Preferences;

// ─── Saved pages ─────────────────────────────────────────────

/// Ordered list of saved resources under `savedPages`
#[derive(Clone)]
pub struct SavedPages {
    prefs: Rc<Preferences>,
}

impl SavedPages {
    pub fn new(prefs: Rc<Preferences>) -> Self {
        Self { prefs }
    }

    pub async fn list(&self) -> Vec<SavedResource> {
        self.prefs.read_json(keys::SAVED_PAGES).await
    }

    /// Append a snapshot of `url`. Needs no network.
    pub async fn save_page(&self, url: &str, now: DateTime<Utc>) -> Option<SavedResource> {
        let mut saved = None;
        self.prefs
            .update(keys::SAVED_PAGES, |pages: &mut Vec<SavedResource>| {
                let page = SavedResource::portal_page(next_resource_id(pages, now), url, now);
                saved = Some(page.clone());
                pages.push(page);
            })
            .await?;
        if let Some(page) = &saved {
            log::info!("Saved {} as resource {}", page.url, page.id);
        }
        saved
    }

    /// Remove the entry with `id`. Returns the remaining list.
    pub async fn delete(&self, id: &str) -> Option<Vec<SavedResource>> {
        self.prefs
            .update(keys::SAVED_PAGES, |pages: &mut Vec<SavedResource>| {
                pages.retain(|p| p.id != id);
            })
            .await
    }
}

/// Millisecond timestamp id, bumped past every numeric id already present
/// so ids stay strictly increasing even when the clock stalls or goes back.
/// A stored id at `i64::MAX` leaves no numeric successor; the fallback is a
/// suffixed id that is unique within `existing`.
pub fn next_resource_id(existing: &[SavedResource], now: DateTime<Utc>) -> String {
    let now_ms = now.timestamp_millis();
    let max = existing
        .iter()
        .filter_map(|p| p.id.parse::<i64>().ok())
        .max();
    match max.map(|max| max.checked_add(1)) {
        None => now_ms.to_string(),
        Some(Some(next)) => now_ms.max(next).to_string(),
        Some(None) => {
            log::warn!("Saved page ids reached i64::MAX, using a suffixed id");
            (1..=existing.len() + 1)
                .map(|n| format!("{}-{}", now_ms, n))
                .find(|id| existing.iter().all(|p| &p.id != id))
                .unwrap_or_else(|| format!("{}-0", now_ms))
        }
    }
}

// ─── Favorites ───────────────────────────────────────────────

/// Result of a favorite toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub ids: Vec<String>,
    /// Whether `id` is a member after the toggle
    pub added: bool,
}

/// A set of ids stored as a JSON array of strings
#[derive(Clone)]
pub struct FavoriteSet {
    prefs: Rc<Preferences>,
    key: &'static str,
}

impl FavoriteSet {
    pub fn resources(prefs: Rc<Preferences>) -> Self {
        Self { prefs, key: keys::FAVORITE_RESOURCES }
    }

    pub fn articles(prefs: Rc<Preferences>) -> Self {
        Self { prefs, key: keys::SAVED_ARTICLES }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub async fn list(&self) -> Vec<String> {
        self.prefs.read_json(self.key).await
    }

    pub async fn toggle(&self, id: &str) -> Option<FavoriteToggle> {
        let mut added = false;
        let ids = self
            .prefs
            .update(self.key, |ids: &mut Vec<String>| {
                added = toggle_membership(ids, id);
            })
            .await?;
        Some(FavoriteToggle { ids, added })
    }
}

/// Add `id` if absent, remove every copy if present. Returns the new membership.
pub fn toggle_membership(ids: &mut Vec<String>, id: &str) -> bool {
    if ids.iter().any(|i| i == id) {
        ids.retain(|i| i != id);
        false
    } else {
        ids.push(id.to_string());
        true
    }
}

// ─── Onboarding flag ─────────────────────────────────────────

#[derive(Clone)]
pub struct OnboardingFlag {
    prefs: Rc<Preferences>,
}

impl OnboardingFlag {
    pub fn new(prefs: Rc<Preferences>) -> Self {
        Self { prefs }
    }

    pub async fn is_seen(&self) -> bool {
        self.prefs.get(keys::ONBOARDING_SEEN).await.as_deref() == Some(keys::ONBOARDING_SEEN_VALUE)
    }

    pub async fn mark_seen(&self) -> bool {
        self.prefs
            .set(keys::ONBOARDING_SEEN, keys::ONBOARDING_SEEN_VALUE)
            .await
    }

    pub async fn reset(&self) -> bool {
        self.prefs.remove(keys::ONBOARDING_SEEN).await
    }
}

// ─── Config ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct ConfigStore {
    prefs: Rc<Preferences>,
}

impl ConfigStore {
    pub fn new(prefs: Rc<Preferences>) -> Self {
        Self { prefs }
    }

    /// `None` when nothing was saved yet or the saved config is unreadable
    pub async fn load(&self) -> Option<AppConfig> {
        let raw = self.prefs.get(keys::CONFIG).await?;
        match serde_json::from_str(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Ignoring unreadable config: {}", e);
                None
            }
        }
    }

    pub async fn save(&self, config: &AppConfig) -> bool {
        self.prefs.write_json(keys::CONFIG, config).await
    }
}
