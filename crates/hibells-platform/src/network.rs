//! Online/offline tracking via `window` events.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use hibells_core::event_bus::EventBus;
use hibells_types::{event::AppEvent, AppError, Result};

pub struct NetworkMonitor {
    window: Window,
    on_online: Closure<dyn FnMut(Event)>,
    on_offline: Closure<dyn FnMut(Event)>,
}

impl NetworkMonitor {
    /// Start forwarding `online` / `offline` events to the bus.
    /// Listeners are removed when the monitor is dropped.
    pub fn start(event_bus: EventBus) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Other("No window object".to_string()))?;

        let bus = event_bus.clone();
        let on_online = Closure::wrap(Box::new(move |_: Event| {
            bus.emit(AppEvent::NetworkChanged { online: true });
        }) as Box<dyn FnMut(Event)>);

        let bus = event_bus;
        let on_offline = Closure::wrap(Box::new(move |_: Event| {
            bus.emit(AppEvent::NetworkChanged { online: false });
        }) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref())
            .map_err(|e| AppError::JsInterop(format!("{:?}", e)))?;
        window
            .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref())
            .map_err(|e| AppError::JsInterop(format!("{:?}", e)))?;

        Ok(Self {
            window,
            on_online,
            on_offline,
        })
    }

    /// `navigator.onLine`; assumes online when there is no window
    pub fn is_online() -> bool {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    }
}

impl Drop for NetworkMonitor {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("online", self.on_online.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("offline", self.on_offline.as_ref().unchecked_ref());
    }
}
