//! Home panel — banner and the news feed.

use egui::{self, RichText, ScrollArea};
use hibells_types::fixtures::NEWS;
use crate::state::UiState;
use crate::theme::*;

pub enum HomeAction {
    None,
    /// Bookmark or un-bookmark a news item
    ToggleArticle(&'static str),
}

pub fn home_panel(ui: &mut egui::Ui, state: &UiState) -> HomeAction {
    let mut action = HomeAction::None;

    egui::Frame::default()
        .fill(ACCENT)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("HiBells").color(TEXT_ON_ACCENT).size(24.0).strong());
            ui.label(
                RichText::new("Bells University Student Portal")
                    .color(BG_ACCENT_SOFT),
            );
        });

    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Frame::default()
                .inner_margin(PANEL_PADDING)
                .show(ui, |ui| {
                    ui.heading(
                        RichText::new("Latest News & Updates")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.add_space(4.0);

                    for item in NEWS {
                        card().show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(item.category).color(ACCENT).small());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        let saved = state.is_article_saved(item.id);
                                        let (text, color) = if saved {
                                            ("Saved", ACCENT)
                                        } else {
                                            ("Save", TEXT_SECONDARY)
                                        };
                                        if ui
                                            .button(RichText::new(text).color(color).small())
                                            .clicked()
                                        {
                                            action = HomeAction::ToggleArticle(item.id);
                                        }
                                    },
                                );
                            });
                            ui.label(RichText::new(item.title).color(TEXT_PRIMARY).strong());
                            ui.label(RichText::new(item.excerpt).color(TEXT_SECONDARY));
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(item.date).color(TEXT_SECONDARY).small());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.hyperlink_to(
                                            RichText::new("Read more").color(ACCENT).small(),
                                            item.url,
                                        );
                                    },
                                );
                            });
                        });
                        ui.add_space(6.0);
                    }
                });
        });

    action
}
