#[cfg(test)]
mod tests {
    use crate::browser::BrowserView;
    use crate::chat::*;
    use crate::collections::*;
    use crate::event_bus::EventBus;
    use crate::notifier::Notifier;
    use crate::ports::*;
    use crate::preferences::Preferences;
    use crate::responder::{self, Topic, FALLBACK, RULES};
    use crate::router::*;
    use hibells_types::config::AppConfig;
    use hibells_types::event::*;
    use hibells_types::fixtures::EXAMS;
    use hibells_types::keys;
    use hibells_types::tab::Tab;
    use hibells_types::AppError;

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_718_000_000 + secs, 0).unwrap()
    }

    // ─── Mocks ───────────────────────────────────────────────

    /// Yields to the executor once before completing, so two concurrent
    /// read-modify-writes interleave at the storage boundary.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();
        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[derive(Default)]
    struct MockStore {
        data: RefCell<HashMap<String, String>>,
        fail_reads: Cell<bool>,
        fail_writes: Cell<bool>,
        writes: Cell<usize>,
    }

    impl MockStore {
        fn with(key: &str, value: &str) -> Self {
            let store = MockStore::default();
            store.data.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }
    }

    #[async_trait(?Send)]
    impl KeyValuePort for MockStore {
        async fn get(&self, key: &str) -> hibells_types::Result<Option<String>> {
            YieldOnce(false).await;
            if self.fail_reads.get() {
                return Err(AppError::Storage("read failed".to_string()));
            }
            Ok(self.data.borrow().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> hibells_types::Result<()> {
            if self.fail_writes.get() {
                return Err(AppError::Storage("quota exceeded".to_string()));
            }
            self.writes.set(self.writes.get() + 1);
            self.data.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> hibells_types::Result<()> {
            if self.fail_writes.get() {
                return Err(AppError::Storage("remove failed".to_string()));
            }
            self.data.borrow_mut().remove(key);
            Ok(())
        }

        async fn clear(&self) -> hibells_types::Result<()> {
            self.data.borrow_mut().clear();
            Ok(())
        }

        fn backend_name(&self) -> &str {
            "mock"
        }
    }

    struct MockNotifications {
        initial: Permission,
        answer: Permission,
        fail: bool,
        requests: Cell<usize>,
        scheduled: RefCell<Vec<OneShotNotification>>,
    }

    impl MockNotifications {
        fn new(initial: Permission, answer: Permission) -> Self {
            Self {
                initial,
                answer,
                fail: false,
                requests: Cell::new(0),
                scheduled: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl NotificationPort for MockNotifications {
        async fn request_permission(&self) -> hibells_types::Result<Permission> {
            self.requests.set(self.requests.get() + 1);
            Ok(self.answer)
        }

        fn permission(&self) -> Permission {
            self.initial
        }

        async fn schedule(&self, notification: OneShotNotification) -> hibells_types::Result<()> {
            if self.fail {
                return Err(AppError::Notification("platform refused".to_string()));
            }
            self.scheduled.borrow_mut().push(notification);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockFrame {
        loads: RefCell<Vec<(String, String)>>,
        refuse: bool,
    }

    impl FramePort for MockFrame {
        fn load(&self, url: &str, sandbox: &SandboxPolicy) -> hibells_types::Result<()> {
            if self.refuse {
                return Err(AppError::Frame("no document".to_string()));
            }
            self.loads
                .borrow_mut()
                .push((url.to_string(), sandbox.attribute_value()));
            Ok(())
        }

        fn set_visible(&self, _visible: bool) {}

        fn set_bounds(&self, _bounds: FrameBounds) {}
    }

    fn prefs_over(store: &Rc<MockStore>) -> Rc<Preferences> {
        Rc::new(Preferences::new(store.clone()))
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_pending());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus = EventBus::new();
        bus.emit(AppEvent::ReplyDue);
        bus.notice(Notice::info("Saved", "ok"));
        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], AppEvent::ReplyDue));
        assert!(matches!(events[1], AppEvent::Notice(_)));
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        bus1.emit(AppEvent::NetworkChanged { online: false });
        assert!(bus2.has_pending());
        assert_eq!(bus2.drain().len(), 1);
        assert!(!bus1.has_pending());
    }

    // ─── Responder Tests ─────────────────────────────────────

    #[test]
    fn test_every_keyword_selects_its_rule() {
        for rule in RULES {
            for keyword in rule.keywords {
                let input = format!("please help with {}", keyword);
                assert_eq!(responder::respond(&input), rule.reply, "keyword {:?}", keyword);
                assert_eq!(responder::classify(&input), Some(rule.topic));
            }
        }
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        assert_eq!(responder::respond("hello there"), FALLBACK);
        assert_eq!(responder::respond(""), FALLBACK);
        assert_eq!(responder::classify("good morning"), None);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(responder::classify("Show my TIMETABLE"), Some(Topic::Schedule));
        assert_eq!(responder::classify("What's my GPA?"), Some(Topic::Results));
    }

    #[test]
    fn test_earlier_rule_wins() {
        // "where" (campus) and "exam" both hit; exams are declared first
        assert_eq!(responder::classify("Where is my exam?"), Some(Topic::Exams));
        // "class" (schedule) beats "course"
        assert_eq!(responder::classify("which course is my next class"), Some(Topic::Schedule));
    }

    #[test]
    fn test_next_exam_lists_every_exam_course() {
        let reply = responder::respond("When is my next exam?");
        for exam in EXAMS {
            assert!(reply.contains(exam.course_code), "missing {}", exam.course_code);
            assert!(reply.contains(exam.date), "missing {}", exam.date);
        }
    }

    #[test]
    fn test_respond_is_deterministic() {
        for input in ["course registration", "library hours", "random words"] {
            assert_eq!(responder::respond(input), responder::respond(input));
        }
    }

    #[test]
    fn test_quick_actions_hit_expected_topics() {
        assert_eq!(responder::classify(QuickAction::Schedule.prompt()), Some(Topic::Schedule));
        assert_eq!(responder::classify(QuickAction::Courses.prompt()), Some(Topic::Courses));
        assert_eq!(responder::classify(QuickAction::Map.prompt()), Some(Topic::Campus));
        assert_eq!(responder::classify(QuickAction::Records.prompt()), Some(Topic::Results));
    }

    // ─── ChatSession Tests ───────────────────────────────────

    #[test]
    fn test_chat_starts_with_greeting() {
        let session = ChatSession::new(at(0));
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, hibells_types::message::Sender::Assistant);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_chat_blank_submit_ignored() {
        let mut session = ChatSession::new(at(0));
        assert_eq!(session.submit("   ", at(1)), SubmitOutcome::Ignored);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_chat_user_message_appended_before_reply() {
        let mut session = ChatSession::new(at(0));
        assert_eq!(session.submit("  When is my next exam?  ", at(1)), SubmitOutcome::StartTimer);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].text, "When is my next exam?");
        assert!(session.is_typing());

        let outcome = session.complete_reply(at(2)).unwrap();
        assert_eq!(outcome.topic, Some(Topic::Exams));
        assert!(!outcome.start_next);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].text, responder::respond("exam"));
        assert!(!session.is_typing());
        assert_eq!(session.last_topic(), Some(Topic::Exams));
    }

    #[test]
    fn test_chat_overlapping_submits_answer_in_order() {
        let mut session = ChatSession::new(at(0));
        assert_eq!(session.submit("my timetable", at(1)), SubmitOutcome::StartTimer);
        assert_eq!(session.submit("my gpa", at(1)), SubmitOutcome::Queued);
        assert_eq!(session.submit("hello", at(1)), SubmitOutcome::Queued);
        assert_eq!(session.pending_count(), 3);

        assert!(session.complete_reply(at(2)).unwrap().start_next);
        assert!(session.complete_reply(at(3)).unwrap().start_next);
        let last = session.complete_reply(at(4)).unwrap();
        assert!(!last.start_next);
        assert_eq!(last.topic, None);

        let replies: Vec<&str> = session.messages()[4..].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            replies,
            vec![
                responder::respond("my timetable"),
                responder::respond("my gpa"),
                FALLBACK,
            ]
        );
    }

    #[test]
    fn test_chat_complete_without_pending() {
        let mut session = ChatSession::new(at(0));
        assert!(session.complete_reply(at(1)).is_none());
        assert_eq!(session.messages().len(), 1);
    }

    // ─── TabRouter Tests ─────────────────────────────────────

    #[test]
    fn test_router_starts_home() {
        let router = TabRouter::default();
        assert_eq!(router.active(), Tab::Home);
        assert_eq!(router.pending(), None);
    }

    #[test]
    fn test_router_same_tab_is_noop() {
        let mut router = TabRouter::new(0);
        assert_eq!(router.change_tab(Tab::Home), TabChange::Unchanged);
        assert_eq!(router.active(), Tab::Home);
    }

    #[test]
    fn test_router_immediate_switch() {
        let mut router = TabRouter::new(0);
        assert_eq!(router.change_tab(Tab::Portal), TabChange::Switched(Tab::Portal));
        assert_eq!(router.active(), Tab::Portal);
    }

    #[test]
    fn test_router_deferred_switch_commits() {
        let mut router = TabRouter::new(150);
        let change = router.change_tab(Tab::Assistant);
        let seq = match change {
            TabChange::Deferred { tab, seq } => {
                assert_eq!(tab, Tab::Assistant);
                seq
            }
            other => panic!("expected deferred, got {:?}", other),
        };
        assert_eq!(router.active(), Tab::Home);
        assert_eq!(router.pending(), Some(Tab::Assistant));
        assert_eq!(router.commit(seq), Some(Tab::Assistant));
        assert_eq!(router.active(), Tab::Assistant);
        assert_eq!(router.commit(seq), None);
    }

    #[test]
    fn test_router_latest_call_wins() {
        let mut router = TabRouter::new(150);
        let first = router.change_tab(Tab::Portal);
        let second = router.change_tab(Tab::Community);
        let (TabChange::Deferred { seq: s1, .. }, TabChange::Deferred { seq: s2, .. }) = (first, second) else {
            panic!("expected two deferred switches");
        };
        assert_eq!(router.commit(s1), None);
        assert_eq!(router.active(), Tab::Home);
        assert_eq!(router.commit(s2), Some(Tab::Community));
    }

    #[test]
    fn test_router_back_to_active_drops_pending() {
        let mut router = TabRouter::new(150);
        let TabChange::Deferred { seq, .. } = router.change_tab(Tab::Portal) else {
            panic!("expected deferred");
        };
        assert_eq!(router.change_tab(Tab::Home), TabChange::Unchanged);
        assert_eq!(router.commit(seq), None);
        assert_eq!(router.active(), Tab::Home);
    }

    // ─── Preferences Tests ───────────────────────────────────

    #[test]
    fn test_prefs_set_get_roundtrip() {
        let store = Rc::new(MockStore::default());
        let prefs = prefs_over(&store);
        block_on(async {
            for (k, v) in [("a", "1"), ("", ""), ("ключ", "значение"), ("k", "{\"json\":true}")] {
                assert!(prefs.set(k, v).await);
                assert_eq!(prefs.get(k).await.as_deref(), Some(v));
            }
        });
        assert_eq!(prefs.backend_name(), "mock");
    }

    #[test]
    fn test_prefs_remove_then_absent() {
        let store = Rc::new(MockStore::with("k", "v"));
        let prefs = prefs_over(&store);
        block_on(async {
            assert!(prefs.remove("k").await);
            assert_eq!(prefs.get("k").await, None);
            // missing key is fine
            assert!(prefs.remove("k").await);
        });
    }

    #[test]
    fn test_prefs_clear() {
        let store = Rc::new(MockStore::with("a", "1"));
        let prefs = prefs_over(&store);
        block_on(async {
            prefs.set("b", "2").await;
            assert!(prefs.clear().await);
            assert_eq!(prefs.get("a").await, None);
            assert_eq!(prefs.get("b").await, None);
        });
    }

    #[test]
    fn test_prefs_errors_are_swallowed() {
        let store = Rc::new(MockStore::with("k", "v"));
        store.fail_reads.set(true);
        store.fail_writes.set(true);
        let prefs = prefs_over(&store);
        block_on(async {
            assert_eq!(prefs.get("k").await, None);
            assert!(!prefs.set("k", "w").await);
            assert!(!prefs.remove("k").await);
        });
        assert_eq!(store.data.borrow().get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_prefs_corrupt_json_reads_empty() {
        let store = Rc::new(MockStore::with(keys::SAVED_PAGES, "[{broken"));
        let prefs = prefs_over(&store);
        let pages = block_on(SavedPages::new(prefs).list());
        assert!(pages.is_empty());
    }

    #[test]
    fn test_prefs_concurrent_updates_do_not_lose_writes() {
        let store = Rc::new(MockStore::default());
        let prefs = prefs_over(&store);
        let (a, b) = block_on(futures::future::join(
            prefs.update("ids", |ids: &mut Vec<String>| ids.push("a".to_string())),
            prefs.update("ids", |ids: &mut Vec<String>| ids.push("b".to_string())),
        ));
        assert_eq!(a, Some(vec!["a".to_string()]));
        assert_eq!(b, Some(vec!["a".to_string(), "b".to_string()]));

        let stored: Vec<String> = block_on(prefs.read_json("ids"));
        assert_eq!(stored, vec!["a", "b"]);
    }

    #[test]
    fn test_prefs_update_failed_write_changes_nothing() {
        let store = Rc::new(MockStore::with("ids", r#"["x"]"#));
        store.fail_writes.set(true);
        let prefs = prefs_over(&store);
        let result = block_on(prefs.update("ids", |ids: &mut Vec<String>| ids.clear()));
        assert_eq!(result, None);
        assert_eq!(store.data.borrow()["ids"], r#"["x"]"#);
    }

    #[test]
    fn test_prefs_update_failed_read_skips_write() {
        let store = Rc::new(MockStore::default());
        store.fail_reads.set(true);
        let prefs = prefs_over(&store);
        let result = block_on(prefs.update("ids", |ids: &mut Vec<String>| ids.push("a".to_string())));
        assert_eq!(result, None);
        assert_eq!(store.writes.get(), 0);
    }

    // ─── SavedPages Tests ────────────────────────────────────

    #[test]
    fn test_save_page_appends_one_record() {
        let store = Rc::new(MockStore::default());
        let pages = SavedPages::new(prefs_over(&store));
        let saved = block_on(pages.save_page("https://portal", at(0))).unwrap();
        let list = block_on(pages.list());
        assert_eq!(list, vec![saved.clone()]);
        assert_eq!(saved.kind, hibells_types::resource::ResourceKind::Portal);
        assert_eq!(saved.id, at(0).timestamp_millis().to_string());
    }

    #[test]
    fn test_save_page_ids_strictly_increase() {
        let store = Rc::new(MockStore::default());
        let pages = SavedPages::new(prefs_over(&store));
        block_on(async {
            pages.save_page("https://a", at(10)).await;
            pages.save_page("https://b", at(10)).await;
            // clock went backwards
            pages.save_page("https://c", at(5)).await;
        });
        let ids: Vec<i64> = block_on(pages.list())
            .iter()
            .map(|p| p.id.parse().unwrap())
            .collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "{:?}", ids);
    }

    #[test]
    fn test_next_resource_id_ignores_opaque_ids() {
        let now = at(0);
        let existing = vec![hibells_types::resource::SavedResource::portal_page(
            "not-a-number".to_string(),
            "u",
            now,
        )];
        assert_eq!(next_resource_id(&existing, now), now.timestamp_millis().to_string());
    }

    #[test]
    fn test_next_resource_id_at_numeric_limit_stays_unique() {
        let now = at(0);
        let page = |id: String| {
            hibells_types::resource::SavedResource::portal_page(id, "u", now)
        };
        let mut existing = vec![page(i64::MAX.to_string())];
        let first = next_resource_id(&existing, now);
        assert_ne!(first, i64::MAX.to_string());
        assert_eq!(first, format!("{}-1", now.timestamp_millis()));

        existing.push(page(first.clone()));
        let second = next_resource_id(&existing, now);
        assert!(existing.iter().all(|p| p.id != second), "{}", second);
    }

    #[test]
    fn test_save_page_after_max_id_does_not_panic() {
        let store = Rc::new(MockStore::with(
            keys::SAVED_PAGES,
            &format!(
                r#"[{{"id":"{}","title":"Bells Portal","url":"u","type":"portal","savedAt":"2024-01-01T00:00:00Z"}}]"#,
                i64::MAX
            ),
        ));
        let pages = SavedPages::new(prefs_over(&store));
        let saved = block_on(pages.save_page("https://a", at(0))).unwrap();
        assert_ne!(saved.id, i64::MAX.to_string());
        assert_eq!(block_on(pages.list()).len(), 2);
    }

    #[test]
    fn test_concurrent_saves_both_kept() {
        let store = Rc::new(MockStore::default());
        let pages = SavedPages::new(prefs_over(&store));
        block_on(futures::future::join(
            pages.save_page("https://a", at(0)),
            pages.save_page("https://b", at(0)),
        ));
        let list = block_on(pages.list());
        assert_eq!(list.len(), 2);
        assert_ne!(list[0].id, list[1].id);
    }

    #[test]
    fn test_delete_page_by_id() {
        let store = Rc::new(MockStore::default());
        let pages = SavedPages::new(prefs_over(&store));
        let (a, b) = block_on(async {
            let a = pages.save_page("https://a", at(0)).await.unwrap();
            let b = pages.save_page("https://b", at(1)).await.unwrap();
            (a, b)
        });
        let remaining = block_on(pages.delete(&a.id)).unwrap();
        assert_eq!(remaining, vec![b]);
        assert_eq!(block_on(pages.delete("missing")).unwrap().len(), 1);
    }

    #[test]
    fn test_save_page_storage_failure_is_silent() {
        let store = Rc::new(MockStore::default());
        store.fail_writes.set(true);
        let pages = SavedPages::new(prefs_over(&store));
        assert!(block_on(pages.save_page("https://a", at(0))).is_none());
        assert!(store.data.borrow().is_empty());
    }

    // ─── FavoriteSet Tests ───────────────────────────────────

    #[test]
    fn test_toggle_membership() {
        let mut ids = vec!["1".to_string()];
        assert!(toggle_membership(&mut ids, "2"));
        assert_eq!(ids, vec!["1", "2"]);
        assert!(!toggle_membership(&mut ids, "1"));
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_favorite_toggle_twice_restores() {
        let store = Rc::new(MockStore::with(keys::FAVORITE_RESOURCES, r#"["3"]"#));
        let favorites = FavoriteSet::resources(prefs_over(&store));
        let before = block_on(favorites.list());

        let first = block_on(favorites.toggle("5")).unwrap();
        assert!(first.added);
        assert_eq!(first.ids, vec!["3", "5"]);

        let second = block_on(favorites.toggle("5")).unwrap();
        assert!(!second.added);
        assert_eq!(block_on(favorites.list()), before);
    }

    #[test]
    fn test_favorite_sets_use_separate_keys() {
        let store = Rc::new(MockStore::default());
        let prefs = prefs_over(&store);
        let articles = FavoriteSet::articles(prefs.clone());
        let resources = FavoriteSet::resources(prefs);
        assert_eq!(articles.key(), keys::SAVED_ARTICLES);

        block_on(articles.toggle("1"));
        assert_eq!(block_on(articles.list()), vec!["1"]);
        assert!(block_on(resources.list()).is_empty());
    }

    // ─── Onboarding Tests ────────────────────────────────────

    #[test]
    fn test_onboarding_fresh_install_then_seen() {
        let store = Rc::new(MockStore::default());
        let flag = OnboardingFlag::new(prefs_over(&store));
        assert!(!block_on(flag.is_seen()));
        assert!(block_on(flag.mark_seen()));
        assert_eq!(store.data.borrow()[keys::ONBOARDING_SEEN], "seen");

        // a later launch reads the same store
        let relaunch = OnboardingFlag::new(prefs_over(&store));
        assert!(block_on(relaunch.is_seen()));

        block_on(relaunch.reset());
        assert!(!block_on(relaunch.is_seen()));
    }

    #[test]
    fn test_onboarding_unknown_value_not_seen() {
        let store = Rc::new(MockStore::with(keys::ONBOARDING_SEEN, "maybe"));
        let flag = OnboardingFlag::new(prefs_over(&store));
        assert!(!block_on(flag.is_seen()));
    }

    // ─── ConfigStore Tests ───────────────────────────────────

    #[test]
    fn test_config_store_roundtrip() {
        let store = Rc::new(MockStore::default());
        let configs = ConfigStore::new(prefs_over(&store));
        assert!(block_on(configs.load()).is_none());

        let mut config = AppConfig::default();
        config.reply_delay_ms = 250;
        assert!(block_on(configs.save(&config)));
        assert_eq!(block_on(configs.load()), Some(config));
    }

    #[test]
    fn test_config_store_corrupt_ignored() {
        let store = Rc::new(MockStore::with(keys::CONFIG, "not json"));
        let configs = ConfigStore::new(prefs_over(&store));
        assert!(block_on(configs.load()).is_none());
    }

    // ─── Notifier Tests ──────────────────────────────────────

    #[test]
    fn test_notifier_ids_strictly_increase() {
        let port = Rc::new(MockNotifications::new(Permission::Granted, Permission::Granted));
        let notifier = Notifier::new(port.clone(), at(0));
        let ids: Vec<i32> = block_on(async {
            let mut ids = Vec::new();
            for i in 0..5 {
                ids.push(notifier.schedule_one_shot("t", "b", at(i)).await.unwrap());
            }
            ids
        });
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(port.scheduled.borrow().len(), 5);
        assert_eq!(port.scheduled.borrow()[0].sound.as_deref(), Some("default"));
    }

    #[test]
    fn test_notifier_denied_skips() {
        let port = Rc::new(MockNotifications::new(Permission::Denied, Permission::Denied));
        let notifier = Notifier::new(port.clone(), at(0));
        assert_eq!(block_on(notifier.schedule_one_shot("t", "b", at(60))), None);
        assert!(port.scheduled.borrow().is_empty());
        assert_eq!(port.requests.get(), 0);
    }

    #[test]
    fn test_notifier_prompts_before_first_schedule() {
        let port = Rc::new(MockNotifications::new(Permission::Prompt, Permission::Granted));
        let notifier = Notifier::new(port.clone(), at(0));
        assert!(block_on(notifier.schedule_one_shot("t", "b", at(60))).is_some());
        assert_eq!(port.requests.get(), 1);
        assert_eq!(notifier.permission(), Permission::Granted);
    }

    #[test]
    fn test_notifier_prompt_refused() {
        let port = Rc::new(MockNotifications::new(Permission::Prompt, Permission::Denied));
        let notifier = Notifier::new(port.clone(), at(0));
        assert!(!block_on(notifier.request_permission()));
        assert!(block_on(notifier.schedule_one_shot("t", "b", at(60))).is_none());
        // no second prompt once denied
        assert_eq!(port.requests.get(), 1);
    }

    #[test]
    fn test_notifier_platform_failure_logged() {
        let mut port = MockNotifications::new(Permission::Granted, Permission::Granted);
        port.fail = true;
        let notifier = Notifier::new(Rc::new(port), at(0));
        assert!(block_on(notifier.schedule_one_shot("t", "b", at(60))).is_none());
    }

    #[test]
    fn test_notifier_remind_in_fixed_delay() {
        let port = Rc::new(MockNotifications::new(Permission::Granted, Permission::Granted));
        let notifier = Notifier::new(port.clone(), at(0));
        block_on(notifier.remind_in("Exam", "CSC 301", at(0), 3600));
        let scheduled = port.scheduled.borrow();
        assert_eq!(scheduled[0].at, at(0) + Duration::seconds(3600));
        assert_eq!(scheduled[0].title, "Exam");
    }

    // ─── BrowserView Tests ───────────────────────────────────

    #[test]
    fn test_sandbox_policy_allow_list() {
        let policy = SandboxPolicy::portal();
        assert_eq!(
            policy.attribute_value(),
            "allow-scripts allow-forms allow-same-origin allow-popups allow-top-navigation allow-downloads"
        );
        assert!(policy.allows(SandboxCapability::Scripts));
    }

    #[test]
    fn test_browser_load_sets_loading() {
        let frame = MockFrame::default();
        let mut view = BrowserView::new("about:blank", true);
        assert!(!view.is_loading());
        assert!(view.load("https://portal", &frame).is_none());
        assert!(view.is_loading());
        assert_eq!(view.url(), "https://portal");
        let loads = frame.loads.borrow();
        assert_eq!(loads[0].0, "https://portal");
        assert!(loads[0].1.contains("allow-same-origin"));
    }

    #[test]
    fn test_browser_loaded_clears_flags() {
        let frame = MockFrame::default();
        let mut view = BrowserView::new("https://portal", true);
        let (started, _) = view.refresh(&frame);
        assert!(started);
        assert!(view.is_loading());
        assert!(view.is_refreshing());
        assert_eq!(view.on_frame_event(FrameEvent::Loaded), None);
        assert!(!view.is_loading());
        assert!(!view.is_refreshing());
    }

    #[test]
    fn test_browser_refresh_ignored_while_refreshing() {
        let frame = MockFrame::default();
        let mut view = BrowserView::new("https://portal", true);
        assert!(view.refresh(&frame).0);
        assert!(!view.refresh(&frame).0);
        assert_eq!(frame.loads.borrow().len(), 1);
    }

    #[test]
    fn test_browser_error_is_advisory_without_retry() {
        let frame = MockFrame::default();
        let mut view = BrowserView::new("https://portal", true);
        view.load("https://portal", &frame);
        let notice = view
            .on_frame_event(FrameEvent::Error { message: "net::ERR".to_string() })
            .unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Connection Error");
        assert!(!view.is_loading());
        assert_eq!(frame.loads.borrow().len(), 1);
    }

    #[test]
    fn test_browser_refused_load_surfaces_error() {
        let frame = MockFrame { refuse: true, ..MockFrame::default() };
        let mut view = BrowserView::new("https://portal", true);
        let notice = view.load("https://portal", &frame).unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_browser_offline_is_advisory() {
        let frame = MockFrame::default();
        let mut view = BrowserView::new("https://portal", true);
        view.set_online(false);
        assert!(!view.is_online());
        // loading still goes ahead
        view.load("https://portal", &frame);
        assert_eq!(frame.loads.borrow().len(), 1);
        let notice = view.on_frame_event(FrameEvent::Loaded).unwrap();
        assert_eq!(notice.title, "Offline Mode");
    }

    #[test]
    fn test_browser_ignores_frame_events_before_first_load() {
        let frame = MockFrame::default();
        let mut view = BrowserView::new("https://portal", false);
        // the blank placeholder document fires load before the portal is requested
        assert_eq!(view.on_frame_event(FrameEvent::Loaded), None);
        assert_eq!(
            view.on_frame_event(FrameEvent::Error { message: "blank".to_string() }),
            None
        );

        view.load("https://portal", &frame);
        let notice = view.on_frame_event(FrameEvent::Loaded).unwrap();
        assert_eq!(notice.title, "Offline Mode");
    }

    #[test]
    fn test_browser_save_offline_without_network() {
        let store = Rc::new(MockStore::default());
        let pages = SavedPages::new(prefs_over(&store));
        let view = BrowserView::new("https://portal", false);
        let saved = block_on(view.save_current_page_offline(pages.clone(), at(0))).unwrap();
        assert_eq!(saved.url, "https://portal");
        assert_eq!(block_on(pages.list()).len(), 1);
    }
}
