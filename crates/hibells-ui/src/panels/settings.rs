//! Settings panel — assistant timing, reminders, storage mode.
//! Changes apply in memory right away; Save persists them.

use egui::{self, RichText, Vec2};
use hibells_types::config::{AppConfig, StorageBackendType};
use crate::state::SaveFeedback;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was changed
    Changed,
    /// The user clicked the explicit Save button
    SaveClicked,
    /// Wipe every stored preference
    ClearData,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut AppConfig,
    backend_in_use: &str,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut save_clicked = false;
    let mut clear_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Assistant Section ────────────────────────────
            ui.label(RichText::new("Assistant").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Reply delay (ms)").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.reply_delay_ms, 0..=5000))
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);

            ui.label(RichText::new("Tab switch delay (ms)").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.tab_switch_delay_ms, 0..=1000))
                .changed()
            {
                changed = true;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Reminders Section ────────────────────────────
            ui.label(RichText::new("Reminders").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Remind me after (minutes)").color(TEXT_SECONDARY).small());
            let mut minutes = config.reminder_delay_secs / 60;
            if ui.add(egui::Slider::new(&mut minutes, 1..=1440)).changed() {
                config.reminder_delay_secs = minutes * 60;
                changed = true;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Storage Section ──────────────────────────────
            ui.label(RichText::new("Storage").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Backend").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("storage_backend")
                .selected_text(config.storage.backend.label())
                .show_ui(ui, |ui| {
                    for backend in StorageBackendType::all() {
                        if ui
                            .selectable_value(
                                &mut config.storage.backend,
                                backend.clone(),
                                backend.label(),
                            )
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.add_space(4.0);
            ui.label(
                RichText::new(config.storage.backend.description())
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );
            ui.label(
                RichText::new(format!("In use: {} (applies on next launch)", backend_in_use))
                    .color(TEXT_SECONDARY)
                    .small(),
            );

            ui.add_space(8.0);
            if ui
                .button(RichText::new("Clear local data").color(ERROR))
                .clicked()
            {
                clear_clicked = true;
            }

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(
                        RichText::new("Save Settings")
                            .color(TEXT_ON_ACCENT)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if clear_clicked {
        SettingsAction::ClearData
    } else if save_clicked {
        SettingsAction::SaveClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
