//! First-launch walkthrough.

use egui::{self, Align, Layout, RichText, Vec2};
use hibells_types::fixtures::ONBOARDING_STEPS;
use crate::state::Onboarding;
use crate::theme::*;

pub enum OnboardingAction {
    None,
    /// Finished the last step or skipped
    Done,
}

pub fn onboarding_panel(ui: &mut egui::Ui, flow: &mut Onboarding) -> OnboardingAction {
    let mut action = OnboardingAction::None;
    let Some(step) = ONBOARDING_STEPS.get(flow.step()) else {
        return OnboardingAction::Done;
    };

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.label(
            RichText::new(format!("{} / {}", flow.step() + 1, flow.total()))
                .color(TEXT_SECONDARY)
                .small(),
        );
        ui.add_space(8.0);
        ui.heading(RichText::new(step.title).color(TEXT_PRIMARY).strong());
        ui.add_space(4.0);
        ui.label(RichText::new(step.description).color(TEXT_SECONDARY));
        ui.add_space(24.0);

        ui.allocate_ui_with_layout(
            Vec2::new(ui.available_width().min(360.0), 32.0),
            Layout::left_to_right(Align::Center),
            |ui| {
                if ui.button("Skip").clicked() {
                    action = OnboardingAction::Done;
                }
                if !flow.is_first() && ui.button("Previous").clicked() {
                    flow.prev();
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = if flow.is_last() { "Get Started" } else { "Next" };
                    let next = egui::Button::new(RichText::new(label).color(TEXT_ON_ACCENT))
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING);
                    if ui.add(next).clicked() && flow.next() {
                        action = OnboardingAction::Done;
                    }
                });
            },
        );
    });

    action
}
