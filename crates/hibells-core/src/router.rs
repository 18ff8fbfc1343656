//! Active tab state.
//!
//! A switch either lands immediately or, with a cosmetic delay configured,
//! is deferred under a sequence number. Only the most recent deferred
//! switch may commit; there is no queue.

use hibells_types::tab::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabChange {
    Unchanged,
    Switched(Tab),
    /// Call [`TabRouter::commit`] with `seq` once the delay elapses
    Deferred { tab: Tab, seq: u64 },
}

#[derive(Debug)]
pub struct TabRouter {
    active: Tab,
    pending: Option<(Tab, u64)>,
    seq: u64,
    delay_ms: u32,
}

impl TabRouter {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            active: Tab::Home,
            pending: None,
            seq: 0,
            delay_ms,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Tab a deferred switch is heading to
    pub fn pending(&self) -> Option<Tab> {
        self.pending.map(|(tab, _)| tab)
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    pub fn change_tab(&mut self, next: Tab) -> TabChange {
        if next == self.active {
            // Supersedes any deferred switch elsewhere
            self.pending = None;
            return TabChange::Unchanged;
        }
        if self.delay_ms == 0 {
            self.pending = None;
            self.active = next;
            return TabChange::Switched(next);
        }
        self.seq += 1;
        self.pending = Some((next, self.seq));
        TabChange::Deferred { tab: next, seq: self.seq }
    }

    /// Land the deferred switch tagged `seq`. Stale tags are ignored.
    pub fn commit(&mut self, seq: u64) -> Option<Tab> {
        match self.pending {
            Some((tab, pending_seq)) if pending_seq == seq => {
                self.pending = None;
                self.active = tab;
                Some(tab)
            }
            _ => None,
        }
    }
}

impl Default for TabRouter {
    fn default() -> Self {
        Self::new(0)
    }
}
