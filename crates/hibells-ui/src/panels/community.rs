//! Community panel — student posts and upcoming campus events.

use egui::{self, RichText, ScrollArea};
use hibells_types::fixtures::{CampusEvent, CommunityPost, EVENTS, POSTS};
use crate::state::{CommunityTab, UiState};
use crate::theme::*;

pub enum CommunityAction {
    None,
    /// Schedule a reminder for this event
    RemindMe(&'static CampusEvent),
}

pub fn community_panel(ui: &mut egui::Ui, state: &mut UiState) -> CommunityAction {
    let mut action = CommunityAction::None;

    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new("Student Community")
                    .color(TEXT_PRIMARY)
                    .strong(),
            );
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.community_tab, CommunityTab::Feed, "Feed");
                ui.selectable_value(&mut state.community_tab, CommunityTab::Events, "Events");
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match state.community_tab {
                    CommunityTab::Feed => {
                        for post in POSTS {
                            post_card(ui, post);
                        }
                    }
                    CommunityTab::Events => {
                        for event in EVENTS {
                            if event_card(ui, event, state.notifications_granted) {
                                action = CommunityAction::RemindMe(event);
                            }
                        }
                    }
                });
        });

    action
}

fn post_card(ui: &mut egui::Ui, post: &CommunityPost) {
    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            egui::Frame::default()
                .fill(ACCENT)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(post.avatar).color(TEXT_ON_ACCENT).strong());
                });
            ui.vertical(|ui| {
                ui.label(RichText::new(post.author).color(TEXT_PRIMARY).strong());
                ui.label(
                    RichText::new(format!("{} · {}", post.posted, post.category))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });
        });
        ui.label(RichText::new(post.content).color(TEXT_PRIMARY));
        ui.label(
            RichText::new(format!("♥ {}   💬 {}", post.likes, post.comments))
                .color(TEXT_SECONDARY)
                .small(),
        );
    });
    ui.add_space(6.0);
}

/// Returns `true` when "Remind me" was clicked
fn event_card(ui: &mut egui::Ui, event: &CampusEvent, granted: Option<bool>) -> bool {
    let mut clicked = false;
    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(event.category).color(ACCENT).small());
        ui.label(RichText::new(event.title).color(TEXT_PRIMARY).strong());
        ui.label(
            RichText::new(format!("{} at {}", event.date, event.time))
                .color(TEXT_SECONDARY)
                .small(),
        );
        ui.label(RichText::new(event.location).color(TEXT_SECONDARY).small());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} attending", event.attendees))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let hint = if granted == Some(false) {
                    "Notifications are blocked"
                } else {
                    ""
                };
                let button = ui
                    .add_enabled(granted != Some(false), egui::Button::new("Remind me"))
                    .on_disabled_hover_text(hint);
                clicked = button.clicked();
            });
        });
    });
    ui.add_space(6.0);
    clicked
}
