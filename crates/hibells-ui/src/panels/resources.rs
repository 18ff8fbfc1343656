//! Resources panel — searchable catalog, saved portal pages and favorites.

use egui::{self, Align, Layout, RichText, ScrollArea};
use hibells_types::resource::{CatalogResource, SavedResource};
use crate::state::{ResourceTab, UiState};
use crate::theme::*;

pub enum ResourceAction {
    None,
    ToggleFavorite(&'static str),
    DeleteSaved(String),
    /// Open a catalog link or saved page in a new browser tab
    Open(String),
}

pub fn resources_panel(ui: &mut egui::Ui, state: &mut UiState) -> ResourceAction {
    let mut action = ResourceAction::None;

    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new("Academic Resources")
                    .color(TEXT_PRIMARY)
                    .strong(),
            );
            ui.add_space(4.0);
            ui.add(
                egui::TextEdit::singleline(&mut state.search_query)
                    .hint_text("Search resources...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                for tab in ResourceTab::all() {
                    ui.selectable_value(&mut state.resource_tab, *tab, tab.label());
                }
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match state.resource_tab {
                    ResourceTab::All => {
                        let list = state.filtered_catalog();
                        if list.is_empty() {
                            empty(ui, "No resources match your search", "");
                        }
                        for resource in list {
                            catalog_card(ui, resource, state.is_favorite(resource.id), &mut action);
                        }
                    }
                    ResourceTab::Saved => {
                        let list = state.filtered_saved_pages();
                        if list.is_empty() {
                            empty(
                                ui,
                                "No saved pages yet",
                                "Use \"Save Offline\" in the Portal tab to keep a page here",
                            );
                        }
                        for page in list {
                            saved_card(ui, page, &mut action);
                        }
                    }
                    ResourceTab::Favorites => {
                        let list = state.favorite_catalog();
                        if list.is_empty() {
                            empty(
                                ui,
                                "No favorite resources yet",
                                "Tap the star on any resource to add it to favorites",
                            );
                        }
                        for resource in list {
                            catalog_card(ui, resource, true, &mut action);
                        }
                    }
                });
        });

    action
}

fn catalog_card(
    ui: &mut egui::Ui,
    resource: &'static CatalogResource,
    favorite: bool,
    action: &mut ResourceAction,
) {
    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(resource.kind.label()).color(TEXT_SECONDARY).small());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let (star, color) = if favorite { ("★", STAR) } else { ("☆", TEXT_SECONDARY) };
                if ui.button(RichText::new(star).color(color)).clicked() {
                    *action = ResourceAction::ToggleFavorite(resource.id);
                }
            });
        });
        ui.label(RichText::new(resource.title).color(TEXT_PRIMARY).strong());
        ui.label(RichText::new(resource.description).color(TEXT_SECONDARY));
        ui.horizontal(|ui| {
            ui.label(RichText::new(resource.category).color(ACCENT).small());
            if let Some(size) = resource.size {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(size).color(TEXT_SECONDARY).small());
                });
            }
        });
        let open = egui::Button::new(RichText::new(resource.action_label()).color(TEXT_ON_ACCENT))
            .fill(ACCENT)
            .corner_radius(PANEL_ROUNDING)
            .min_size(egui::vec2(ui.available_width(), 28.0));
        if ui.add(open).clicked() {
            *action = ResourceAction::Open(resource.url.to_string());
        }
    });
    ui.add_space(6.0);
}

fn saved_card(ui: &mut egui::Ui, page: &SavedResource, action: &mut ResourceAction) {
    card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(page.kind.label()).color(TEXT_SECONDARY).small());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(RichText::new("Delete").color(ERROR).small()).clicked() {
                    *action = ResourceAction::DeleteSaved(page.id.clone());
                }
                if ui.button(RichText::new("Open").color(ACCENT).small()).clicked() {
                    *action = ResourceAction::Open(page.url.clone());
                }
            });
        });
        ui.label(RichText::new(&page.title).color(TEXT_PRIMARY).strong());
        ui.label(RichText::new(&page.url).color(TEXT_SECONDARY).small());
    });
    ui.add_space(6.0);
}

fn empty(ui: &mut egui::Ui, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(title).color(TEXT_SECONDARY));
        if !hint.is_empty() {
            ui.label(RichText::new(hint).color(TEXT_SECONDARY).small());
        }
    });
}
