//! Portal panel — toolbar over the area the sandboxed frame is laid on.
//!
//! egui only reserves the rectangle; the app positions the real frame over
//! the returned rect every frame.

use egui::{self, Align, Layout, Rect, RichText, Sense, Vec2};
use hibells_core::browser::BrowserView;
use crate::state::UiState;
use crate::theme::*;

pub enum PortalAction {
    None,
    Refresh,
    SaveOffline,
}

pub struct PortalOutput {
    pub action: PortalAction,
    /// Screen rect the frame should cover
    pub frame_rect: Rect,
}

pub fn portal_panel(ui: &mut egui::Ui, state: &mut UiState, view: &BrowserView) -> PortalOutput {
    let mut action = PortalAction::None;

    ui.horizontal(|ui| {
        let (dot, text) = if view.is_online() {
            (SUCCESS, "Online")
        } else {
            (WARNING, "Offline")
        };
        ui.label(RichText::new("●").color(dot));
        ui.label(RichText::new(text).color(TEXT_SECONDARY).small());
        if view.is_loading() {
            ui.spinner();
            ui.label(RichText::new("Loading portal...").color(TEXT_SECONDARY).small());
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .selectable_label(state.show_portal_menu, RichText::new("⋮").strong())
                .clicked()
            {
                state.show_portal_menu = !state.show_portal_menu;
            }
            if state.show_portal_menu {
                if ui.button("Save Offline").clicked() {
                    action = PortalAction::SaveOffline;
                    state.show_portal_menu = false;
                }
                let refresh = ui.add_enabled(!view.is_refreshing(), egui::Button::new("Refresh"));
                if refresh.clicked() {
                    action = PortalAction::Refresh;
                    state.show_portal_menu = false;
                }
            }
        });
    });

    let size = Vec2::new(ui.available_width(), ui.available_height().max(0.0));
    let (frame_rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter().rect_filled(frame_rect, PANEL_ROUNDING, BG_SECONDARY);

    PortalOutput { action, frame_rect }
}

/// The frame sits above the canvas, so drop its top edge below any notices
/// that overlap it. Nothing is left when the notices cover the whole rect.
pub fn clear_of_notices(frame_rect: Rect, notices: Option<Rect>) -> Option<Rect> {
    let Some(notices) = notices else {
        return Some(frame_rect);
    };
    if !frame_rect.intersects(notices) {
        return Some(frame_rect);
    }
    let mut clear = frame_rect;
    clear.min.y = notices.max.y + NOTICE_GAP;
    (clear.height() > 0.0).then_some(clear)
}
