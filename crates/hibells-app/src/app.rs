//! Main egui application — composes all panels and owns the session state.

use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;
use egui::{self, Align2, CentralPanel, RichText, SidePanel, TopBottomPanel};
use gloo_timers::future::TimeoutFuture;

use hibells_core::browser::BrowserView;
use hibells_core::chat::{ChatSession, SubmitOutcome};
use hibells_core::collections::{ConfigStore, FavoriteSet, OnboardingFlag, SavedPages};
use hibells_core::event_bus::EventBus;
use hibells_core::notifier::Notifier;
use hibells_core::ports::{
    FrameBounds, FramePort, KeyValuePort, NotificationPort, OneShotNotification, Permission,
    SandboxPolicy,
};
use hibells_core::preferences::Preferences;
use hibells_core::router::{TabChange, TabRouter};
use hibells_platform::frame::IframeHost;
use hibells_platform::network::NetworkMonitor;
use hibells_platform::notifications::WebNotifications;
use hibells_platform::storage::{auto_detect_store, open_store};
use hibells_types::config::{AppConfig, StorageBackendType};
use hibells_types::event::{AppEvent, Notice};
use hibells_types::fixtures::{CampusEvent, EXAMS};
use hibells_types::tab::Tab;
use hibells_types::{AppError, Result};
use hibells_ui::panels::assistant::{self, AssistantAction};
use hibells_ui::panels::community::{self, CommunityAction};
use hibells_ui::panels::home::{self, HomeAction};
use hibells_ui::panels::onboarding::{self, OnboardingAction};
use hibells_ui::panels::portal::{self, PortalAction, PortalOutput};
use hibells_ui::panels::resources::{self, ResourceAction};
use hibells_ui::panels::settings::{self, SettingsAction};
use hibells_ui::panels::nav;
use hibells_ui::state::UiState;
use hibells_ui::theme;

/// Platform callbacks (frame load, online/offline) only emit on the bus,
/// so keep polling at this cadence even without input.
const IDLE_REPAINT: Duration = Duration::from_millis(500);
const NOTICE_REPAINT: Duration = Duration::from_millis(250);

/// Typed collections bound to one key-value backend
struct Stores {
    prefs: Rc<Preferences>,
    saved_pages: SavedPages,
    favorites: FavoriteSet,
    articles: FavoriteSet,
    onboarding: OnboardingFlag,
}

impl Stores {
    fn open(store: Rc<dyn KeyValuePort>) -> Self {
        let prefs = Rc::new(Preferences::new(store));
        Self {
            saved_pages: SavedPages::new(prefs.clone()),
            favorites: FavoriteSet::resources(prefs.clone()),
            articles: FavoriteSet::articles(prefs.clone()),
            onboarding: OnboardingFlag::new(prefs.clone()),
            prefs,
        }
    }
}

/// What the active tab's panel asked for this frame
enum PanelOutcome {
    Home(HomeAction),
    Portal(PortalOutput),
    Assistant(AssistantAction),
    Resources(ResourceAction),
    Community(CommunityAction),
}

/// The main application state
pub struct HiBellsApp {
    ctx: egui::Context,
    ui_state: UiState,
    config: AppConfig,
    event_bus: EventBus,
    /// Config always lives in the auto-detected store so the backend
    /// choice itself survives a switch to memory.
    settings_prefs: Rc<Preferences>,
    config_store: ConfigStore,
    stores: Stores,
    notifier: Rc<Notifier>,
    frame: Box<dyn FramePort>,
    _network: Option<NetworkMonitor>,
    router: TabRouter,
    chat: ChatSession,
    browser: BrowserView,
    portal_requested: bool,
    frame_visible: bool,
    frame_bounds: Option<FrameBounds>,
    /// Screen rect of the notice stack as last drawn
    notice_rect: Option<egui::Rect>,
    first_frame: bool,
}

impl HiBellsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::default();
        let event_bus = EventBus::new();
        let now = Utc::now();

        let settings_store = auto_detect_store();
        let settings_prefs = Rc::new(Preferences::new(settings_store.clone()));
        let config_store = ConfigStore::new(settings_prefs.clone());
        let stores = Stores::open(settings_store);

        let port: Rc<dyn NotificationPort> = match WebNotifications::new() {
            Ok(n) => Rc::new(n),
            Err(e) => {
                log::warn!("Notifications unavailable: {}. Using stub.", e);
                Rc::new(StubNotifications)
            }
        };
        let notifier = Rc::new(Notifier::new(port, now));

        let frame: Box<dyn FramePort> = match IframeHost::new(event_bus.clone()) {
            Ok(f) => Box::new(f),
            Err(e) => {
                log::warn!("Portal frame unavailable: {}. Using stub.", e);
                Box::new(StubFrame)
            }
        };

        let network = match NetworkMonitor::start(event_bus.clone()) {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("Network monitor unavailable: {}", e);
                None
            }
        };
        let online = NetworkMonitor::is_online();

        let mut ui_state = UiState::new(online);
        ui_state.notifications_granted = permission_flag(notifier.permission());

        let app = Self {
            ctx: cc.egui_ctx.clone(),
            ui_state,
            router: TabRouter::new(config.tab_switch_delay_ms),
            chat: ChatSession::new(now),
            browser: BrowserView::new(config.portal_url.clone(), online),
            config,
            event_bus,
            settings_prefs,
            config_store,
            stores,
            notifier,
            frame,
            _network: network,
            portal_requested: false,
            frame_visible: false,
            frame_bounds: None,
            notice_rect: None,
            first_frame: true,
        };

        app.restore_config();
        app
    }

    /// Restore config from storage (async). Always emits, falling back to defaults.
    fn restore_config(&self) {
        let store = self.config_store.clone();
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let config = match store.load().await {
                Some(config) => {
                    log::info!("Config restored from storage");
                    config
                }
                None => AppConfig::default(),
            };
            bus.emit(AppEvent::ConfigRestored(config));
            ctx.request_repaint();
        });
    }

    fn on_config_restored(&mut self, config: AppConfig) {
        if config.storage.backend == StorageBackendType::Memory {
            self.stores = Stores::open(open_store(&config.storage.backend));
        }
        self.router.set_delay_ms(config.tab_switch_delay_ms);
        if !self.portal_requested {
            self.browser = BrowserView::new(config.portal_url.clone(), self.browser.is_online());
        }
        self.config = config;
        log::info!("Using {} storage", self.stores.prefs.backend_name());
        self.load_collections();
    }

    /// Read the onboarding flag and every persisted collection (async)
    fn load_collections(&self) {
        let onboarding = self.stores.onboarding.clone();
        let pages = self.stores.saved_pages.clone();
        let favorites = self.stores.favorites.clone();
        let articles = self.stores.articles.clone();
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            bus.emit(AppEvent::OnboardingChecked {
                seen: onboarding.is_seen().await,
            });
            bus.emit(AppEvent::SavedPagesLoaded(pages.list().await));
            for set in [favorites, articles] {
                bus.emit(AppEvent::FavoritesLoaded {
                    key: set.key().to_string(),
                    ids: set.list().await,
                });
            }
            ctx.request_repaint();
        });
    }

    fn process_events(&mut self) {
        let events = self.event_bus.drain();
        if events.is_empty() {
            return;
        }
        let now = self.ctx.input(|i| i.time);
        for event in events {
            match event {
                AppEvent::Frame(frame_event) => {
                    if let Some(notice) = self.browser.on_frame_event(frame_event) {
                        self.ui_state.push_notice(notice, now);
                    }
                }
                AppEvent::NetworkChanged { online } => {
                    self.browser.set_online(online);
                    self.ui_state.apply(AppEvent::NetworkChanged { online }, now);
                }
                AppEvent::ReplyDue => self.on_reply_due(),
                AppEvent::TabSwitchDue { seq } => {
                    if let Some(tab) = self.router.commit(seq) {
                        self.on_tab_entered(tab);
                    }
                }
                AppEvent::ConfigRestored(config) => self.on_config_restored(config),
                other => self.ui_state.apply(other, now),
            }
        }
        self.ctx.request_repaint();
    }

    fn notify(&mut self, notice: Notice) {
        let now = self.ctx.input(|i| i.time);
        self.ui_state.push_notice(notice, now);
    }

    // ── Tabs ─────────────────────────────────────────────────

    fn change_tab(&mut self, tab: Tab) {
        match self.router.change_tab(tab) {
            TabChange::Unchanged => {}
            TabChange::Switched(tab) => self.on_tab_entered(tab),
            TabChange::Deferred { seq, .. } => {
                let delay = self.router.delay_ms();
                let bus = self.event_bus.clone();
                let ctx = self.ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    bus.emit(AppEvent::TabSwitchDue { seq });
                    ctx.request_repaint();
                });
            }
        }
    }

    /// The portal is loaded the first time its tab is shown
    fn on_tab_entered(&mut self, tab: Tab) {
        self.ui_state.show_portal_menu = false;
        if tab == Tab::Portal && !self.portal_requested {
            self.portal_requested = true;
            let url = self.config.portal_url.clone();
            if let Some(notice) = self.browser.load(&url, self.frame.as_ref()) {
                self.notify(notice);
            }
        }
    }

    /// Lay the frame over the portal rect, or hide it
    fn sync_frame(&mut self, rect: Option<egui::Rect>) {
        if let Some(rect) = rect {
            // egui points to CSS pixels; the canvas fills the page from its origin
            let zoom = self.ctx.zoom_factor();
            let bounds = FrameBounds {
                x: rect.min.x * zoom,
                y: rect.min.y * zoom,
                width: rect.width() * zoom,
                height: rect.height() * zoom,
            };
            if self.frame_bounds != Some(bounds) {
                self.frame.set_bounds(bounds);
                self.frame_bounds = Some(bounds);
            }
        }
        let visible = rect.is_some();
        if visible != self.frame_visible {
            self.frame.set_visible(visible);
            self.frame_visible = visible;
        }
    }

    // ── Assistant ────────────────────────────────────────────

    fn submit(&mut self, text: &str) {
        match self.chat.submit(text, Utc::now()) {
            SubmitOutcome::StartTimer => self.start_reply_timer(),
            SubmitOutcome::Queued => {
                log::debug!("Reply queued ({} pending)", self.chat.pending_count());
            }
            SubmitOutcome::Ignored => {}
        }
    }

    fn start_reply_timer(&self) {
        let delay = self.config.reply_delay_ms;
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            bus.emit(AppEvent::ReplyDue);
            ctx.request_repaint();
        });
    }

    fn on_reply_due(&mut self) {
        if let Some(outcome) = self.chat.complete_reply(Utc::now()) {
            if outcome.start_next {
                self.start_reply_timer();
            }
        }
    }

    // ── Reminders ────────────────────────────────────────────

    fn schedule_reminder(&self, title: String, body: String) {
        let notifier = self.notifier.clone();
        let delay = self.config.reminder_delay_secs;
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let scheduled = notifier.remind_in(&title, &body, Utc::now(), delay).await;
            if let Some(granted) = permission_flag(notifier.permission()) {
                bus.emit(AppEvent::PermissionResolved { granted });
            }
            bus.notice(match scheduled {
                Some(_) => Notice::success(
                    "Reminder set",
                    format!("We'll remind you about \"{}\"", title),
                ),
                None => Notice::error(
                    "Reminder not set",
                    "Notifications are not allowed for HiBells.",
                ),
            });
            ctx.request_repaint();
        });
    }

    fn remind_exams(&self) {
        let exams = EXAMS
            .iter()
            .map(|e| format!("{} ({})", e.course_code, e.date))
            .collect::<Vec<_>>()
            .join(", ");
        self.schedule_reminder(
            "Exam Reminder".to_string(),
            format!("Upcoming exams: {}", exams),
        );
    }

    fn remind_event(&self, event: &CampusEvent) {
        self.schedule_reminder(
            event.title.to_string(),
            format!("{} at {}, {}", event.date, event.time, event.location),
        );
    }

    fn finish_onboarding(&mut self) {
        self.ui_state.onboarding = None;
        let flag = self.stores.onboarding.clone();
        let notifier = self.notifier.clone();
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if flag.mark_seen().await {
                log::info!("Onboarding completed");
            }
            let granted = notifier.request_permission().await;
            bus.emit(AppEvent::PermissionResolved { granted });
            ctx.request_repaint();
        });
    }

    // ── Collections ──────────────────────────────────────────

    fn toggle_favorite(&self, set: FavoriteSet, id: &str, added: Notice, removed: Notice) {
        let id = id.to_string();
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match set.toggle(&id).await {
                Some(toggle) => {
                    bus.emit(AppEvent::FavoritesLoaded {
                        key: set.key().to_string(),
                        ids: toggle.ids,
                    });
                    bus.notice(if toggle.added { added } else { removed });
                }
                None => bus.notice(Notice::error("Not saved", "Could not update your list.")),
            }
            ctx.request_repaint();
        });
    }

    fn save_offline(&self) {
        let pages = self.stores.saved_pages.clone();
        let save = self
            .browser
            .save_current_page_offline(pages.clone(), Utc::now());
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match save.await {
                Some(_) => {
                    bus.notice(Notice::success(
                        "Saved for offline use! 📱",
                        "Page saved to Resources tab",
                    ));
                    bus.emit(AppEvent::SavedPagesLoaded(pages.list().await));
                }
                None => bus.notice(Notice::error("Save failed", "Could not save this page.")),
            }
            ctx.request_repaint();
        });
    }

    fn delete_saved(&self, id: String) {
        let pages = self.stores.saved_pages.clone();
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match pages.delete(&id).await {
                Some(remaining) => {
                    bus.emit(AppEvent::SavedPagesLoaded(remaining));
                    bus.notice(Notice::info("Page Removed", "Saved page deleted"));
                }
                None => bus.notice(Notice::error("Delete failed", "Could not remove this page.")),
            }
            ctx.request_repaint();
        });
    }

    // ── Settings ─────────────────────────────────────────────

    /// Save config to storage (async, fire-and-forget)
    fn save_config(&self) {
        let store = self.config_store.clone();
        let config = self.config.clone();
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let ok = store.save(&config).await;
            if ok {
                log::info!("Config saved to storage");
            }
            bus.emit(AppEvent::ConfigSaved { ok });
            ctx.request_repaint();
        });
    }

    fn clear_data(&self) {
        let data = self.stores.prefs.clone();
        let settings = self.settings_prefs.clone();
        let keys = [self.stores.favorites.key(), self.stores.articles.key()];
        let bus = self.event_bus.clone();
        let ctx = self.ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            // both handles may share one backend; clearing twice is harmless
            let ok = data.clear().await & settings.clear().await;
            bus.emit(AppEvent::SavedPagesLoaded(Vec::new()));
            for key in keys {
                bus.emit(AppEvent::FavoritesLoaded {
                    key: key.to_string(),
                    ids: Vec::new(),
                });
            }
            bus.notice(if ok {
                Notice::success(
                    "Local data cleared",
                    "Onboarding will show again next time you open HiBells.",
                )
            } else {
                Notice::error("Clear failed", "Some data could not be removed.")
            });
            ctx.request_repaint();
        });
    }

    // ── Rendering ────────────────────────────────────────────

    fn show_notices(&mut self, ctx: &egui::Context) {
        if self.ui_state.notices.is_empty() {
            self.notice_rect = None;
            return;
        }
        let shown = egui::Area::new(egui::Id::new("notices"))
            .anchor(Align2::CENTER_TOP, [0.0, 8.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for active in &self.ui_state.notices {
                    let color = theme::notice_color(active.notice.kind);
                    theme::card()
                        .stroke(egui::Stroke::new(1.0, color))
                        .show(ui, |ui| {
                            ui.set_max_width(340.0);
                            ui.label(RichText::new(&active.notice.title).color(color).strong());
                            ui.label(
                                RichText::new(&active.notice.description)
                                    .color(theme::TEXT_SECONDARY)
                                    .small(),
                            );
                        });
                    ui.add_space(theme::NOTICE_GAP);
                }
            });
        self.notice_rect = Some(shown.response.rect);
    }

    fn handle_outcome(&mut self, outcome: PanelOutcome) {
        let mut frame_rect = None;
        match outcome {
            PanelOutcome::Home(HomeAction::ToggleArticle(id)) => self.toggle_favorite(
                self.stores.articles.clone(),
                id,
                Notice::success("Article Saved", "Article saved for offline reading"),
                Notice::info("Article Removed", "Article removed from saved items"),
            ),
            PanelOutcome::Home(HomeAction::None) => {}
            PanelOutcome::Portal(output) => {
                // notices from the previous pass; NOTICE_REPAINT keeps this fresh
                frame_rect = portal::clear_of_notices(output.frame_rect, self.notice_rect);
                match output.action {
                    PortalAction::Refresh => {
                        let (started, notice) = self.browser.refresh(self.frame.as_ref());
                        if !started {
                            log::debug!("Refresh already in flight");
                        }
                        if let Some(notice) = notice {
                            self.notify(notice);
                        }
                    }
                    PortalAction::SaveOffline => self.save_offline(),
                    PortalAction::None => {}
                }
            }
            PanelOutcome::Assistant(AssistantAction::Submit(text)) => self.submit(&text),
            PanelOutcome::Assistant(AssistantAction::ExamReminder) => self.remind_exams(),
            PanelOutcome::Assistant(AssistantAction::None) => {}
            PanelOutcome::Resources(ResourceAction::ToggleFavorite(id)) => self.toggle_favorite(
                self.stores.favorites.clone(),
                id,
                Notice::success("Added to Favorites", "Find it under the Favorites tab"),
                Notice::info("Removed from Favorites", "Resource removed from favorites"),
            ),
            PanelOutcome::Resources(ResourceAction::DeleteSaved(id)) => self.delete_saved(id),
            PanelOutcome::Resources(ResourceAction::Open(url)) => {
                self.ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            PanelOutcome::Resources(ResourceAction::None) => {}
            PanelOutcome::Community(CommunityAction::RemindMe(event)) => self.remind_event(event),
            PanelOutcome::Community(CommunityAction::None) => {}
        }
        self.sync_frame(frame_rect);
    }
}

impl eframe::App for HiBellsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.notify(Notice::info(
                "Welcome to HiBells! 🎓",
                "Your all-in-one Bells University companion app",
            ));
            self.first_frame = false;
        }

        self.process_events();
        let now = ctx.input(|i| i.time);
        self.ui_state.prune_notices(now);

        if self.ui_state.notices.is_empty() {
            ctx.request_repaint_after(IDLE_REPAINT);
        } else {
            ctx.request_repaint_after(NOTICE_REPAINT);
        }

        // ── Onboarding takes over the screen ─────────────────
        if let Some(mut flow) = self.ui_state.onboarding {
            let mut done = false;
            CentralPanel::default().show(ctx, |ui| {
                done = matches!(
                    onboarding::onboarding_panel(ui, &mut flow),
                    OnboardingAction::Done
                );
            });
            self.ui_state.onboarding = Some(flow);
            if done {
                self.finish_onboarding();
            }
            self.sync_frame(None);
            self.show_notices(ctx);
            return;
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("HiBells")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                let (status, color) = if self.ui_state.online {
                    ("Online", theme::SUCCESS)
                } else {
                    ("Offline", theme::WARNING)
                };
                ui.label(RichText::new(status).color(color).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let backend = self.stores.prefs.backend_name().to_string();
            let feedback = self.ui_state.settings_feedback.clone();
            let mut action = SettingsAction::None;
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    action = settings::settings_panel(ui, &mut self.config, &backend, feedback.as_ref());
                });
            match action {
                SettingsAction::Changed => {
                    self.router.set_delay_ms(self.config.tab_switch_delay_ms);
                    self.ui_state.settings_feedback = None;
                }
                SettingsAction::SaveClicked => {
                    self.router.set_delay_ms(self.config.tab_switch_delay_ms);
                    self.save_config();
                }
                SettingsAction::ClearData => self.clear_data(),
                SettingsAction::None => {}
            }
        }

        // ── Bottom navigation ────────────────────────────────
        let mut picked = None;
        TopBottomPanel::bottom("nav_bar")
            .exact_height(theme::NAV_HEIGHT)
            .show(ctx, |ui| {
                picked = nav::nav_bar(ui, self.router.active(), self.router.pending());
            });
        if let Some(tab) = picked {
            self.change_tab(tab);
        }

        // ── Active tab ───────────────────────────────────────
        let active = self.router.active();
        let mut outcome = PanelOutcome::Home(HomeAction::None);
        CentralPanel::default().show(ctx, |ui| {
            outcome = match active {
                Tab::Home => PanelOutcome::Home(home::home_panel(ui, &self.ui_state)),
                Tab::Portal => PanelOutcome::Portal(portal::portal_panel(
                    ui,
                    &mut self.ui_state,
                    &self.browser,
                )),
                Tab::Assistant => PanelOutcome::Assistant(assistant::assistant_panel(
                    ui,
                    &mut self.ui_state,
                    &self.chat,
                )),
                Tab::Resources => {
                    PanelOutcome::Resources(resources::resources_panel(ui, &mut self.ui_state))
                }
                Tab::Community => {
                    PanelOutcome::Community(community::community_panel(ui, &mut self.ui_state))
                }
            };
        });
        self.handle_outcome(outcome);

        self.show_notices(ctx);

        // handlers above may have emitted synchronously (e.g. a stub frame)
        if self.event_bus.has_pending() {
            ctx.request_repaint();
        }
    }
}

fn permission_flag(permission: Permission) -> Option<bool> {
    match permission {
        Permission::Granted => Some(true),
        Permission::Denied => Some(false),
        Permission::Prompt => None,
    }
}

// ─── Stubs for browsers missing an API ───────────────────────

struct StubNotifications;

#[async_trait::async_trait(?Send)]
impl NotificationPort for StubNotifications {
    async fn request_permission(&self) -> Result<Permission> {
        Ok(Permission::Denied)
    }

    fn permission(&self) -> Permission {
        Permission::Denied
    }

    async fn schedule(&self, notification: OneShotNotification) -> Result<()> {
        Err(AppError::Notification(format!(
            "Notifications not available, dropped \"{}\"",
            notification.title
        )))
    }
}

struct StubFrame;

impl FramePort for StubFrame {
    fn load(&self, url: &str, _sandbox: &SandboxPolicy) -> Result<()> {
        Err(AppError::Frame(format!("No frame host to load {}", url)))
    }

    fn set_visible(&self, _visible: bool) {}

    fn set_bounds(&self, _bounds: FrameBounds) {}
}
