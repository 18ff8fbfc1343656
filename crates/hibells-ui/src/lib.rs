//! HiBells UI — egui panels and the state they render from.
//!
//! Panels never touch storage or the platform; they mutate [`state::UiState`]
//! and return actions for the app layer to carry out.

pub mod panels;
pub mod state;
pub mod theme;
