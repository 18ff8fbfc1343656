//! Browser adapters for the HiBells ports.
//!
//! Everything here assumes a `window`; constructors report its absence as
//! an error so the app can fall back to a stub.

pub mod storage;
pub mod notifications;
pub mod frame;
pub mod network;
