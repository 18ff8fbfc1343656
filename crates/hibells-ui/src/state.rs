//! UI-level state that drives rendering.
//! Collections mirrored from storage are refreshed by draining the EventBus;
//! the app owns the core session objects and pushes notices in here.

use hibells_types::{
    event::{AppEvent, Notice},
    fixtures::{ONBOARDING_STEPS, CATALOG},
    resource::{CatalogResource, SavedResource},
    keys,
};

/// How long a notice stays on screen, in seconds of egui time
pub const NOTICE_TTL_SECS: f64 = 4.0;

/// State visible to UI panels
pub struct UiState {
    /// Toasts currently on screen, oldest first
    pub notices: Vec<ActiveNotice>,
    /// Assistant input field content
    pub input_text: String,
    /// Resources search box content
    pub search_query: String,
    pub resource_tab: ResourceTab,
    pub community_tab: CommunityTab,
    /// `Some` while the onboarding flow is showing
    pub onboarding: Option<Onboarding>,
    /// Whether settings panel is open
    pub show_settings: bool,
    pub settings_feedback: Option<SaveFeedback>,
    /// Whether the portal's action menu is expanded
    pub show_portal_menu: bool,
    pub saved_pages: Vec<SavedResource>,
    pub favorite_resources: Vec<String>,
    pub saved_articles: Vec<String>,
    /// Advisory connectivity flag
    pub online: bool,
    /// `None` until the user has been asked
    pub notifications_granted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub expires_at: f64,
}

/// Save feedback passed in from the app layer
#[derive(Debug, Clone, PartialEq)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceTab {
    #[default]
    All,
    Saved,
    Favorites,
}

impl ResourceTab {
    pub fn all() -> &'static [ResourceTab] {
        &[ResourceTab::All, ResourceTab::Saved, ResourceTab::Favorites]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceTab::All => "All Resources",
            ResourceTab::Saved => "Saved",
            ResourceTab::Favorites => "Favorites",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunityTab {
    #[default]
    Feed,
    Events,
}

/// Position within the onboarding steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Onboarding {
    step: usize,
}

impl Onboarding {
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        ONBOARDING_STEPS.len()
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 >= self.total()
    }

    /// Advance one step. Returns `true` when the flow is complete.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return true;
        }
        self.step += 1;
        false
    }

    pub fn prev(&mut self) {
        self.step = self.step.saturating_sub(1);
    }
}

impl UiState {
    pub fn new(online: bool) -> Self {
        Self {
            notices: Vec::new(),
            input_text: String::new(),
            search_query: String::new(),
            resource_tab: ResourceTab::default(),
            community_tab: CommunityTab::default(),
            onboarding: None,
            show_settings: false,
            settings_feedback: None,
            show_portal_menu: false,
            saved_pages: Vec::new(),
            favorite_resources: Vec::new(),
            saved_articles: Vec::new(),
            online,
            notifications_granted: None,
        }
    }

    /// Apply the events the UI owns. Events that need core objects
    /// (frame, reply and tab timers, config) are the app's and are skipped.
    pub fn apply(&mut self, event: AppEvent, now: f64) {
        match event {
            AppEvent::Notice(notice) => self.push_notice(notice, now),
            AppEvent::SavedPagesLoaded(pages) => self.saved_pages = pages,
            AppEvent::FavoritesLoaded { key, ids } => match key.as_str() {
                keys::FAVORITE_RESOURCES => self.favorite_resources = ids,
                keys::SAVED_ARTICLES => self.saved_articles = ids,
                other => log::warn!("Favorites loaded for unknown key {}", other),
            },
            AppEvent::OnboardingChecked { seen } => {
                self.onboarding = if seen { None } else { Some(Onboarding::default()) };
            }
            AppEvent::NetworkChanged { online } => self.online = online,
            AppEvent::PermissionResolved { granted } => {
                self.notifications_granted = Some(granted);
            }
            AppEvent::ConfigSaved { ok } => {
                self.settings_feedback = Some(SaveFeedback {
                    message: if ok { "Settings saved" } else { "Save failed" }.to_string(),
                    success: ok,
                });
            }
            AppEvent::Frame(_)
            | AppEvent::ReplyDue
            | AppEvent::TabSwitchDue { .. }
            | AppEvent::ConfigRestored(_) => {}
        }
    }

    pub fn push_notice(&mut self, notice: Notice, now: f64) {
        self.notices.push(ActiveNotice {
            notice,
            expires_at: now + NOTICE_TTL_SECS,
        });
    }

    /// Drop expired notices
    pub fn prune_notices(&mut self, now: f64) {
        self.notices.retain(|n| n.expires_at > now);
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_resources.iter().any(|f| f == id)
    }

    pub fn is_article_saved(&self, id: &str) -> bool {
        self.saved_articles.iter().any(|a| a == id)
    }

    /// Catalog entries matching the search box
    pub fn filtered_catalog(&self) -> Vec<&'static CatalogResource> {
        CATALOG
            .iter()
            .filter(|r| r.matches(&self.search_query))
            .collect()
    }

    /// Starred catalog entries matching the search box
    pub fn favorite_catalog(&self) -> Vec<&'static CatalogResource> {
        self.filtered_catalog()
            .into_iter()
            .filter(|r| self.is_favorite(r.id))
            .collect()
    }

    /// Saved pages whose title or URL match the search box
    pub fn filtered_saved_pages(&self) -> Vec<&SavedResource> {
        let q = self.search_query.trim().to_lowercase();
        self.saved_pages
            .iter()
            .filter(|p| {
                q.is_empty()
                    || p.title.to_lowercase().contains(&q)
                    || p.url.to_lowercase().contains(&q)
            })
            .collect()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(true)
    }
}
