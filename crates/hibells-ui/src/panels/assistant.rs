//! Assistant panel — displays the conversation, quick actions and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use hibells_core::chat::{ChatSession, QuickAction};
use hibells_core::responder::Topic;
use hibells_types::message::{ChatMessage, Sender};
use crate::state::UiState;
use crate::theme::*;

pub enum AssistantAction {
    None,
    /// Text typed or picked from a quick action
    Submit(String),
    /// Schedule a reminder for the upcoming exams
    ExamReminder,
}

/// Render the assistant panel. Returns what the user asked for.
pub fn assistant_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: &ChatSession,
) -> AssistantAction {
    let mut action = AssistantAction::None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Student Assistant")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let (status, color) = if session.is_typing() {
                            ("Typing...", WARNING)
                        } else {
                            ("Online", SUCCESS)
                        };
                        ui.label(RichText::new(status).color(color).small());
                    });
                });

                ui.separator();

                // Quick actions
                ui.horizontal_wrapped(|ui| {
                    for quick in QuickAction::all() {
                        if ui
                            .button(RichText::new(quick.label()).color(ACCENT).small())
                            .clicked()
                        {
                            action = AssistantAction::Submit(quick.prompt().to_string());
                        }
                    }
                });

                ui.add_space(4.0);

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in session.messages() {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if session.is_typing() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Assistant is typing").color(TEXT_SECONDARY).small());
                            });
                        } else if session.last_topic() == Some(Topic::Exams) {
                            if ui
                                .button(RichText::new("Set exam reminder").color(ACCENT))
                                .clicked()
                            {
                                action = AssistantAction::ExamReminder;
                            }
                        }
                    });

                ui.add_space(8.0);

                // Input area. Sending stays enabled while a reply is pending;
                // extra submissions queue up behind it.
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask me anything about Bells University...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        action = AssistantAction::Submit(state.input_text.trim().to_string());
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, bg, fg) = match message.sender {
        Sender::User => (Layout::right_to_left(Align::Min), ACCENT, TEXT_ON_ACCENT),
        Sender::Assistant => (Layout::left_to_right(Align::Min), BG_SECONDARY, TEXT_PRIMARY),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(320.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&message.text).color(fg));
                    ui.label(RichText::new(message.time_label()).color(fg).small());
                });
            });
    });
}
