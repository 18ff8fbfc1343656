//! Event bus between spawned tasks, DOM callbacks and the frame loop.
//!
//! Single-threaded (WASM), so a `RefCell` queue is enough. Producers push;
//! the app drains once per egui frame and applies events in order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use hibells_types::event::{AppEvent, Notice};

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<AppEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called from spawned tasks and DOM callbacks.
    /// Never blocks and never drops: the queue is unbounded.
    pub fn emit(&self, event: AppEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Shorthand for publishing an advisory toast
    pub fn notice(&self, notice: Notice) {
        self.emit(AppEvent::Notice(notice));
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Whether anything was emitted since the last drain
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
