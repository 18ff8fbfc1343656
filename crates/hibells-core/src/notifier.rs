//! One-shot reminder scheduling on top of a [`NotificationPort`].
//!
//! Ids come from a monotonic counter seeded from the clock, so two reminders
//! scheduled in the same run never share an id.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use crate::ports::{NotificationPort, OneShotNotification, Permission};

const DEFAULT_SOUND: &str = "default";
const ID_SEED_RANGE: i64 = 1_000_000_000;

pub struct Notifier {
    port: Rc<dyn NotificationPort>,
    permission: Cell<Permission>,
    next_id: Cell<i32>,
}

impl Notifier {
    pub fn new(port: Rc<dyn NotificationPort>, now: DateTime<Utc>) -> Self {
        let permission = port.permission();
        // Seconds keep the seed well below i32::MAX
        let seed = (now.timestamp().rem_euclid(ID_SEED_RANGE) as i32).max(1);
        Self {
            port,
            permission: Cell::new(permission),
            next_id: Cell::new(seed),
        }
    }

    pub fn permission(&self) -> Permission {
        self.permission.get()
    }

    /// Prompt for permission. Errors count as denied.
    pub async fn request_permission(&self) -> bool {
        let permission = match self.port.request_permission().await {
            Ok(p) => p,
            Err(e) => {
                log::error!("Error requesting notification permission: {}", e);
                Permission::Denied
            }
        };
        self.permission.set(permission);
        permission == Permission::Granted
    }

    /// Schedule an alert at `at`. Returns the id it was scheduled under, or
    /// `None` when permission is denied or the platform refused.
    pub async fn schedule_one_shot(
        &self,
        title: &str,
        body: &str,
        at: DateTime<Utc>,
    ) -> Option<i32> {
        if self.permission.get() == Permission::Prompt {
            self.request_permission().await;
        }
        if self.permission.get() != Permission::Granted {
            log::warn!("Notifications not permitted, skipping \"{}\"", title);
            return None;
        }

        let id = self.take_id();
        let notification = OneShotNotification {
            id,
            title: title.to_string(),
            body: body.to_string(),
            at,
            sound: Some(DEFAULT_SOUND.to_string()),
        };
        match self.port.schedule(notification).await {
            Ok(()) => {
                log::info!("Notification {} scheduled for {}", id, at.to_rfc3339());
                Some(id)
            }
            Err(e) => {
                log::error!("Error scheduling notification: {}", e);
                None
            }
        }
    }

    /// Schedule an alert a fixed `delay_secs` after `now`
    pub async fn remind_in(
        &self,
        title: &str,
        body: &str,
        now: DateTime<Utc>,
        delay_secs: u32,
    ) -> Option<i32> {
        let at = now + Duration::seconds(i64::from(delay_secs));
        self.schedule_one_shot(title, body, at).await
    }

    fn take_id(&self) -> i32 {
        let id = self.next_id.get();
        self.next_id.set(if id == i32::MAX { 1 } else { id + 1 });
        id
    }
}
