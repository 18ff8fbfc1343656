//! Notification adapter — the browser Notification API.
//!
//! The web has no "show this at time T" call, so a scheduled alert is a
//! `gloo-timers` timeout that constructs the `Notification` when it fires.
//! Pending timeouts live only as long as the page; nothing is persisted.

use async_trait::async_trait;
use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

use hibells_core::ports::{NotificationPort, OneShotNotification, Permission};
use hibells_types::{AppError, Result};

pub struct WebNotifications;

impl WebNotifications {
    /// Fails when the runtime has no Notification API (e.g. embedded webviews)
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Notification("No window object".to_string()))?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("Notification"))
            .unwrap_or(false);
        if !supported {
            return Err(AppError::Notification(
                "Notification API not supported".to_string(),
            ));
        }
        Ok(Self)
    }
}

#[async_trait(?Send)]
impl NotificationPort for WebNotifications {
    async fn request_permission(&self) -> Result<Permission> {
        let promise = Notification::request_permission()
            .map_err(|e| AppError::JsInterop(format!("{:?}", e)))?;
        let answer = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::PermissionDenied(format!("{:?}", e)))?;
        Ok(match answer.as_string().as_deref() {
            Some("granted") => Permission::Granted,
            Some("denied") => Permission::Denied,
            _ => Permission::Prompt,
        })
    }

    fn permission(&self) -> Permission {
        match Notification::permission() {
            NotificationPermission::Granted => Permission::Granted,
            NotificationPermission::Denied => Permission::Denied,
            _ => Permission::Prompt,
        }
    }

    async fn schedule(&self, notification: OneShotNotification) -> Result<()> {
        let delay_ms = (notification.at - Utc::now())
            .num_milliseconds()
            .clamp(0, i64::from(u32::MAX)) as u32;

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let options = NotificationOptions::new();
            options.set_body(&notification.body);
            options.set_tag(&notification.id.to_string());
            match Notification::new_with_options(&notification.title, &options) {
                Ok(_) => log::info!("Notification {} shown", notification.id),
                Err(e) => log::error!("Notification {} failed: {:?}", notification.id, e),
            }
        });
        Ok(())
    }
}
