//! Bottom navigation bar.

use egui::{self, Align, Layout, RichText, Vec2};
use hibells_types::tab::Tab;
use crate::theme::*;

/// Render one button per tab. Returns the tab the user tapped, if any.
/// `pending` is highlighted while a deferred switch is in flight.
pub fn nav_bar(ui: &mut egui::Ui, active: Tab, pending: Option<Tab>) -> Option<Tab> {
    let mut picked = None;
    let tabs = Tab::all();
    let width = ui.available_width() / tabs.len() as f32;

    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for &tab in tabs {
            let highlighted = tab == active || Some(tab) == pending;
            let (fg, bg) = if highlighted {
                (ACCENT, BG_ACCENT_SOFT)
            } else {
                (TEXT_SECONDARY, BG_SECONDARY)
            };
            let button = egui::Button::new(RichText::new(tab.label()).color(fg).strong())
                .fill(bg)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(width, NAV_HEIGHT - 12.0));
            if ui.add(button).clicked() {
                picked = Some(tab);
            }
        }
    });

    picked
}
