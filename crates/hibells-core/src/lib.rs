//! HiBells core — everything that does not touch the browser.
//!
//! Platform adapters implement the traits in [`ports`]; the app wires them
//! into the facades ([`preferences::Preferences`], [`notifier::Notifier`])
//! and the per-view state machines.

pub mod ports;
pub mod event_bus;
pub mod preferences;
pub mod collections;
pub mod notifier;
pub mod responder;
pub mod chat;
pub mod router;
pub mod browser;

#[cfg(test)]
mod tests;
